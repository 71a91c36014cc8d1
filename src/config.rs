// Everything the site displays lives here. Edit the values below to update the copy.

pub struct Config {
    pub base_image_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub social_urls: SocialUrls,
    pub main_icon_labels: MainIconLabels,
    pub sticker_tooltips: &'static [(u8, &'static str)],
    pub profile: Profile,
}

pub struct SocialUrls {
    pub instagram: &'static str,
    pub linkedin: &'static str,
    pub wordpress: &'static str,
}

/// Labels shown above the five folder icons while hovered.
pub struct MainIconLabels {
    pub instagram: &'static str,
    pub linkedin: &'static str,
    pub smiley: &'static str,
    pub wordpress: &'static str,
    pub notebook: &'static str,
}

pub struct Role {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub struct Hero {
    pub headline: &'static str,
    pub sub_headline: &'static str,
    pub descriptor: &'static str,
}

pub struct Brand {
    pub name: &'static str,
    pub src: &'static str,
    pub url: &'static str,
    pub dark_bg: bool,
}

pub struct Brands {
    pub title: &'static str,
    pub logos: &'static [Brand],
}

pub struct Branch {
    pub label: &'static str,
    pub description: &'static str,
}

pub struct Cta {
    pub label: &'static str,
    pub url: &'static str,
    pub sub_copy: &'static str,
}

pub struct Contribution {
    pub title: &'static str,
    pub sub_text: &'static str,
    pub branches: &'static [Branch],
    pub cta: Cta,
}

pub struct Profile {
    pub roles: &'static [Role],
    pub tags: &'static [&'static str],
    pub hero: Hero,
    pub brands: Brands,
    pub contribution: Contribution,
}

pub static CONFIG: Config = Config {
    base_image_url: "https://maddyleescorner.wordpress.com/wp-content/uploads/2025/11",
    title: "Welcome, It's Maddy!",
    description: "get to know me real quick, and stay connected via IG or Linkedin, don't forget to leave some stamp at my note book",
    social_urls: SocialUrls {
        instagram: "https://www.instagram.com/maddy_da.techie/",
        linkedin: "https://www.linkedin.com/in/maddyl/",
        wordpress: "https://maddyleescorner.wordpress.com",
    },
    main_icon_labels: MainIconLabels {
        instagram: "Connect as a friend :)?",
        linkedin: "'let's connect'",
        smiley: "who's maddy",
        wordpress: "tmi blog page",
        notebook: "write me sth?",
    },
    sticker_tooltips: &[
        (1, "I cant believe 1 day i could live without this guy"),
        (2, "I hate Google analytics because the hard truth it shows"),
        (3, "Google AI studio sponsor me with this lil app"),
        (4, "currently working as a marketer of a crypto startup"),
        (5, "currently working as a marketer of a crypto startup"),
        (6, "I like coldplay, lana del rey, ngọt band, cá hồi hoang, drake, v-pop 2010s"),
        (7, "I hate google search console just like google analytics"),
        (8, "I like arts & media, i capture good pics"),
        (9, "python is the only programing language i know, only use for data analysis"),
    ],
    profile: Profile {
        roles: &[
            Role { emoji: "🎨", text: "Creative Branding" },
            Role { emoji: "✏️", text: "Content Strategist" },
            Role { emoji: "🎧", text: "Podcast Host" },
            Role { emoji: "📈", text: "Tech Marketer" },
            Role { emoji: "🧩", text: "Product Enthusiast" },
        ],
        tags: &["Curious", "Creative", "Bubbly", "Kind", "Always Learning", "Loves to Yap"],
        hero: Hero {
            headline: "Hi, I’m Maddy.",
            sub_headline: "A part-time tech marketer, brand builder, storyteller, and full-time ADHD.",
            descriptor: "I turn dry features into juicy narrative, create brands people remember and products people talk about.",
        },
        brands: Brands {
            title: "Proudly worked and working with these brands and teams",
            logos: &[
                Brand {
                    name: "SmartDev",
                    src: "https://smartdev.com/wp-content/uploads/2025/04/SMD-Logo-New-White-Text-scaled.png",
                    url: "https://smartdev.com/",
                    dark_bg: true,
                },
                Brand {
                    name: "ecommert",
                    src: "https://ecommert.ai/wp-content/uploads/2024/10/logo_ecommert_ai.png",
                    url: "https://ecommert.ai/",
                    dark_bg: false,
                },
                Brand {
                    name: "BuddyTrading",
                    src: "https://buddytrading.com/blog/assets/svgs/big-logo.svg",
                    url: "https://buddytrading.com/",
                    dark_bg: false,
                },
                Brand {
                    name: "FPT",
                    src: "https://fpt.vn/frontend_layout_2025_vibecode/assets/images/logo-ftel.svg",
                    url: "https://fpt.vn/",
                    dark_bg: false,
                },
                Brand {
                    name: "Yellow",
                    src: "https://www.yellow.org/images/footer/logo.svg",
                    url: "https://www.yellow.org/",
                    dark_bg: true,
                },
            ],
        },
        contribution: Contribution {
            title: "Đà Nẵng’s tech scene is evolving fast.",
            sub_text: "And I want to contribute to building something meaningful here.\nIf you’re building a business, product, or startup, I’d love to help.",
            branches: &[
                Branch {
                    label: "Make people remember your brand",
                    description: "Brand direction, visual identity, storytelling, creative concepts, brand-first thinking.",
                },
                Branch {
                    label: "Make people like your product with juicy content",
                    description: "Short-form, long-form, podcast, TikTok, scripting, content frameworks, content design.",
                },
                Branch {
                    label: "Define who will love your product and pay for it",
                    description: "Audience insight, positioning, user journeys, acquisition funnels, business strategy.",
                },
                Branch {
                    label: "Build a cool product people talk about",
                    description: "Ideation, prototyping, UX thinking, validation loops, creative direction for product.",
                },
                Branch {
                    label: "Anything on your tech career or something you’re building",
                    description: "Career advice, brainstorming, strategy chats, whatever helps you move forward.",
                },
            ],
            cta: Cta {
                label: "Book a 1-Hour Discussion With Me",
                url: "https://calendar.app.google/vRt7drgL8qbkQY2s5",
                sub_copy: "Let’s map out your brand, product, or content direction together",
            },
        },
    },
};

impl Config {
    pub fn sticker_tooltip(&self, id: u8) -> &'static str {
        self.sticker_tooltips
            .iter()
            .find(|(sticker_id, _)| *sticker_id == id)
            .map(|(_, text)| *text)
            .unwrap_or("")
    }

    pub fn image_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_image_url, file)
    }
}

/// Where notebook entries get posted. Set `NOTEBOOK_WEBHOOK_URL` at build time;
/// without it the notebook only pretends to send.
#[cfg(not(debug_assertions))]
pub fn webhook_url() -> Option<&'static str> {
    non_empty(option_env!("NOTEBOOK_WEBHOOK_URL"))
}

#[cfg(debug_assertions)]
pub fn webhook_url() -> Option<&'static str> {
    // Local runs post to a dev webhook only when one is given explicitly
    non_empty(option_env!("NOTEBOOK_WEBHOOK_URL_DEV").or(option_env!("NOTEBOOK_WEBHOOK_URL")))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticker_tooltip_lookup() {
        assert_eq!(
            CONFIG.sticker_tooltip(8),
            "I like arts & media, i capture good pics"
        );
        // Unknown ids render an empty tooltip
        assert_eq!(CONFIG.sticker_tooltip(0), "");
        assert_eq!(CONFIG.sticker_tooltip(42), "");
    }

    #[test]
    fn every_sticker_has_a_tooltip() {
        for id in 1..=9 {
            assert!(!CONFIG.sticker_tooltip(id).is_empty(), "sticker {id}");
        }
    }

    #[test]
    fn image_url_joins_base() {
        assert_eq!(
            CONFIG.image_url("5.png"),
            "https://maddyleescorner.wordpress.com/wp-content/uploads/2025/11/5.png"
        );
    }

    #[test]
    fn blank_webhook_counts_as_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(
            non_empty(Some("https://hooks.example.com/x")),
            Some("https://hooks.example.com/x")
        );
    }

    #[test]
    fn profile_lists_are_populated() {
        assert_eq!(CONFIG.profile.roles.len(), 5);
        assert_eq!(CONFIG.profile.contribution.branches.len(), 5);
        assert_eq!(CONFIG.profile.brands.logos.len(), 5);
    }
}
