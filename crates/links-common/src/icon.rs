/// Icon and brand color lookup for social-media links.
///
/// The lookup is total: any platform name outside the known set resolves to
/// the generic link icon in black.
use std::str::FromStr;

use crate::model::Icon;

pub const ICON_CLASS: &str = "Ionicons";
pub const FALLBACK_ICON: &str = "link";
pub const FALLBACK_COLOR: &str = "#000000";

/// Icon used for plain (non-social) link hits.
pub const OPEN_ICON: &str = "open";
/// Icon used for a matched section that does not declare its own.
pub const SECTION_ICON: &str = "list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    YouTube,
    Tumblr,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
        SocialPlatform::Tumblr,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Tumblr => "tumblr",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "logo-linkedin",
            SocialPlatform::Twitter => "logo-twitter",
            SocialPlatform::Facebook => "logo-facebook",
            SocialPlatform::Instagram => "logo-instagram",
            SocialPlatform::YouTube => "logo-youtube",
            SocialPlatform::Tumblr => "logo-tumblr",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "#0077B5",
            SocialPlatform::Twitter => "#1DA1F2",
            SocialPlatform::Facebook => "#3B5998",
            SocialPlatform::Instagram => "#C13584",
            SocialPlatform::YouTube => "#FF0000",
            SocialPlatform::Tumblr => "#35465C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown social platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    /// Case-insensitive match on the platform name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownPlatform(name.to_string()))
    }
}

pub fn social_icon(platform: &str) -> Icon {
    let (name, color) = match platform.parse::<SocialPlatform>() {
        Ok(p) => (p.icon_name(), p.color()),
        Err(_) => (FALLBACK_ICON, FALLBACK_COLOR),
    };
    Icon {
        name: name.to_string(),
        class: ICON_CLASS.to_string(),
        color: Some(color.to_string()),
    }
}

pub fn open_icon() -> Icon {
    Icon::new(OPEN_ICON, ICON_CLASS)
}

pub fn section_icon() -> Icon {
    Icon::new(SECTION_ICON, ICON_CLASS)
}
