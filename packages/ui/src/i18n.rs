use dioxus::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const LANG_STORAGE_KEY: &str = "project_home_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "fr" | "fr-fr" => Some(Lang::Fr),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    // Best-effort: restore the saved language after mount.
    use_effect(move || {
        if let Some(saved) = load_saved_lang() {
            lang.set(saved);
        }
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    use_signal(Lang::default)
}

pub fn set_lang(mut lang_sig: Signal<Lang>, lang: Lang) {
    lang_sig.set(lang);
    save_lang(lang);
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load_saved_lang() -> Option<Lang> {
    let code = local_storage()?.get_item(LANG_STORAGE_KEY).ok().flatten()?;
    Lang::from_code(&code)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_saved_lang() -> Option<Lang> {
    None
}

#[cfg(target_arch = "wasm32")]
fn save_lang(lang: Lang) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.code());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_lang(_lang: Lang) {}

/// Translate a key for a given language. Falls back to English if missing.
pub fn t(lang: Lang, key: &str) -> String {
    let text = match (lang, key) {
        (Lang::En, "app.name") | (Lang::Fr, "app.name") => "PostHog",
        (Lang::En, "nav.home") => "Home",
        (Lang::Fr, "nav.home") => "Accueil",
        (Lang::En, "lang.label") => "Language",
        (Lang::Fr, "lang.label") => "Langue",

        // Page header
        (Lang::En, "home.title_suffix") => "Home",
        (Lang::Fr, "home.title_suffix") => "Accueil",
        (Lang::En, "home.caption") => {
            "Welcome to PostHog! Install one of our libraries to get started."
        }
        (Lang::Fr, "home.caption") => {
            "Bienvenue sur PostHog ! Installez l'une de nos bibliothèques pour commencer."
        }

        // Header CTA
        (Lang::En, "invite.cta") => "Invite Team Members",
        (Lang::Fr, "invite.cta") => "Inviter des membres",
        (Lang::En, "invite.tooltip") => {
            "Because insights are better when they're shared with friends."
        }
        (Lang::Fr, "invite.tooltip") => {
            "Parce que les analyses sont meilleures quand on les partage entre amis."
        }
        (Lang::En, "invite.modal.title") => "Invite team members",
        (Lang::Fr, "invite.modal.title") => "Inviter des membres",
        (Lang::En, "invite.modal.body") => {
            "Share this link with your teammates. Anyone with the link can join your project."
        }
        (Lang::Fr, "invite.modal.body") => {
            "Partagez ce lien avec votre équipe. Toute personne disposant du lien peut rejoindre le projet."
        }
        (Lang::En, "invite.link.loading") => "Creating invite link…",
        (Lang::Fr, "invite.link.loading") => "Création du lien d'invitation…",
        (Lang::En, "invite.link.error") => "Couldn't create an invite link",
        (Lang::Fr, "invite.link.error") => "Impossible de créer un lien d'invitation",
        (Lang::En, "invite.share_email") => "Share by email",
        (Lang::Fr, "invite.share_email") => "Partager par e-mail",
        (Lang::En, "invite.email_subject") => "Join me on PostHog",
        (Lang::Fr, "invite.email_subject") => "Rejoins-moi sur PostHog",
        (Lang::En, "common.close") => "Close",
        (Lang::Fr, "common.close") => "Fermer",
        (Lang::En, "common.dismiss") => "Dismiss",
        (Lang::Fr, "common.dismiss") => "Fermer",
        (Lang::En, "common.error_prefix") => "Error:",
        (Lang::Fr, "common.error_prefix") => "Erreur :",

        // Install module
        (Lang::En, "install.header") => "Install PostHog",
        (Lang::Fr, "install.header") => "Installer PostHog",
        (Lang::En, "install.subheader") => {
            "Installation is easy. Choose from one of our libraries or our simple API."
        }
        (Lang::Fr, "install.subheader") => {
            "L'installation est simple. Choisissez l'une de nos bibliothèques ou notre API."
        }
        (Lang::En, "install.tile.title") => "Install PostHog",
        (Lang::Fr, "install.tile.title") => "Installer PostHog",
        (Lang::En, "install.tile.hover") => {
            "Our broad library support and simple API make it easy to install PostHog anywhere in your stack."
        }
        (Lang::Fr, "install.tile.hover") => {
            "Nos nombreuses bibliothèques et notre API simple permettent d'installer PostHog partout dans votre stack."
        }

        // Community module
        (Lang::En, "community.header") => "Join the PostHog Community",
        (Lang::Fr, "community.header") => "Rejoignez la communauté PostHog",
        (Lang::En, "community.subheader") => {
            "Share your learnings with other PostHog users. Learn about the latest in product analytics directly from the PostHog team and members in our community."
        }
        (Lang::Fr, "community.subheader") => {
            "Partagez vos découvertes avec d'autres utilisateurs de PostHog. Suivez l'actualité de l'analyse produit avec l'équipe PostHog et notre communauté."
        }
        (Lang::En, "community.slack.title") => "Hang out in Slack",
        (Lang::Fr, "community.slack.title") => "Rejoignez-nous sur Slack",
        (Lang::En, "community.slack.hover") => {
            "Talk with other PostHog users, get support on issues, and exclusive access to features in beta development."
        }
        (Lang::Fr, "community.slack.hover") => {
            "Échangez avec d'autres utilisateurs, obtenez de l'aide et un accès exclusif aux fonctionnalités en bêta."
        }
        (Lang::En, "community.github.title") => "Check out our code",
        (Lang::Fr, "community.github.title") => "Découvrez notre code",
        (Lang::En, "community.github.hover") => {
            "Submit a pull request and snag some PostHog merch!"
        }
        (Lang::Fr, "community.github.hover") => {
            "Proposez une pull request et gagnez des goodies PostHog !"
        }

        // Discover insights module
        (Lang::En, "discover.header") => "Discover Insights",
        (Lang::Fr, "discover.header") => "Découvrez vos analyses",
        (Lang::En, "discover.subheader") => {
            "Your team has data! Pick an insight type to start exploring how people use your product."
        }
        (Lang::Fr, "discover.subheader") => {
            "Votre équipe a des données ! Choisissez un type d'analyse pour explorer l'usage de votre produit."
        }
        (Lang::En, "discover.trends.title") => "Trends",
        (Lang::Fr, "discover.trends.title") => "Tendances",
        (Lang::En, "discover.trends.hover") => "See how events and users change over time.",
        (Lang::Fr, "discover.trends.hover") => {
            "Suivez l'évolution des événements et des utilisateurs dans le temps."
        }
        (Lang::En, "discover.funnels.title") => "Funnels",
        (Lang::Fr, "discover.funnels.title") => "Entonnoirs",
        (Lang::En, "discover.funnels.hover") => "Find where users drop off between steps.",
        (Lang::Fr, "discover.funnels.hover") => {
            "Repérez où les utilisateurs abandonnent entre deux étapes."
        }
        (Lang::En, "discover.paths.title") => "User Paths",
        (Lang::Fr, "discover.paths.title") => "Parcours",
        (Lang::En, "discover.paths.hover") => "Follow the routes users take through your product.",
        (Lang::Fr, "discover.paths.hover") => {
            "Suivez les chemins empruntés par vos utilisateurs."
        }
        (Lang::En, "discover.retention.title") => "Retention",
        (Lang::Fr, "discover.retention.title") => "Rétention",
        (Lang::En, "discover.retention.hover") => "Measure how many users keep coming back.",
        (Lang::Fr, "discover.retention.hover") => {
            "Mesurez combien d'utilisateurs reviennent."
        }

        // Lessons module
        (Lang::En, "lessons.header") => "Learn PostHog",
        (Lang::Fr, "lessons.header") => "Apprendre PostHog",
        (Lang::En, "lessons.subheader") => {
            "Tutorials and tips from the PostHog team to get the most out of your data."
        }
        (Lang::Fr, "lessons.subheader") => {
            "Tutoriels et astuces de l'équipe PostHog pour tirer le meilleur de vos données."
        }
        (Lang::En, "lessons.actions.title") => "Track actions",
        (Lang::Fr, "lessons.actions.title") => "Suivre des actions",
        (Lang::En, "lessons.actions.hover") => "Group events into the actions that matter to you.",
        (Lang::Fr, "lessons.actions.hover") => {
            "Regroupez les événements en actions qui comptent pour vous."
        }
        (Lang::En, "lessons.cohorts.title") => "Build cohorts",
        (Lang::Fr, "lessons.cohorts.title") => "Créer des cohortes",
        (Lang::En, "lessons.cohorts.hover") => "Segment users by what they do and who they are.",
        (Lang::Fr, "lessons.cohorts.hover") => {
            "Segmentez les utilisateurs selon leurs actions et leur profil."
        }
        (Lang::En, "lessons.flags.title") => "Roll out feature flags",
        (Lang::Fr, "lessons.flags.title") => "Déployer des feature flags",
        (Lang::En, "lessons.flags.hover") => "Ship features safely to a subset of users first.",
        (Lang::Fr, "lessons.flags.hover") => {
            "Livrez vos fonctionnalités en toute sécurité à un sous-ensemble d'utilisateurs."
        }

        // Not found
        (Lang::En, "notfound.title") => "Page not found",
        (Lang::Fr, "notfound.title") => "Page introuvable",
        (Lang::En, "notfound.back") => "Back to home",
        (Lang::Fr, "notfound.back") => "Retour à l'accueil",

        (Lang::Fr, _) => return t(Lang::En, key),
        (Lang::En, _) => key,
    };
    text.to_string()
}
