//! Medal badge rendering.

use crate::state::{Medal, MedalMark};
use crate::ui::escape::escape;

/// Medal badge keyed by tier, pointing at `<assets>/medal-<tier>.svg`.
pub struct MedalBadge<'a> {
    assets_base: &'a str,
}

impl<'a> MedalBadge<'a> {
    pub fn new(assets_base: &'a str) -> Self {
        Self { assets_base }
    }

    /// Image path for a tier.
    pub fn icon_path(&self, medal: Medal) -> String {
        let base = self.assets_base.trim_end_matches('/');
        if base.is_empty() {
            format!("medal-{}.svg", medal.key())
        } else {
            format!("{}/medal-{}.svg", base, medal.key())
        }
    }

    /// Render the badge for a medal mark.
    ///
    /// Unrecognized values render nothing.
    pub fn render(&self, mark: &MedalMark) -> String {
        match mark {
            MedalMark::Tier(medal) => self.render_tier(*medal),
            MedalMark::Unrecognized(raw) => {
                tracing::warn!(medal = %raw, "Unrecognized medal value, rendering without badge");
                String::new()
            }
        }
    }

    fn render_tier(&self, medal: Medal) -> String {
        let label = format!("{} medal", medal);
        format!(
            "<div class=\"medal-wrapper\" aria-label=\"{label}\"><img src=\"{src}\" alt=\"{label}\" class=\"medal-icon\" /></div>",
            label = label,
            src = escape(&self.icon_path(medal)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_gold() {
        let badge = MedalBadge::new("icons");
        assert_eq!(
            badge.render(&MedalMark::Tier(Medal::Gold)),
            "<div class=\"medal-wrapper\" aria-label=\"Gold medal\"><img src=\"icons/medal-gold.svg\" alt=\"Gold medal\" class=\"medal-icon\" /></div>"
        );
    }

    #[test]
    fn test_icon_path_base_variants() {
        assert_eq!(MedalBadge::new("/static/icons/").icon_path(Medal::Bronze), "/static/icons/medal-bronze.svg");
        assert_eq!(MedalBadge::new("").icon_path(Medal::Silver), "medal-silver.svg");
    }

    #[test]
    fn test_unrecognized_renders_nothing() {
        let badge = MedalBadge::new("icons");
        assert_eq!(
            badge.render(&MedalMark::Unrecognized("<b>platinum</b>".to_string())),
            ""
        );
    }
}
