//! Archive member naming

use std::sync::OnceLock;

use dskit_tokens::{Platform, VariationKind};
use regex::Regex;

/// Name the meta document is written under
pub const META_MEMBER: &str = "meta.json";

/// `{platform}_{variation}.json`
pub fn member_name(platform: Platform, kind: VariationKind) -> String {
    format!("{}_{}.json", platform.id(), kind.id())
}

fn member_pattern() -> &'static Regex {
    static MEMBER: OnceLock<Regex> = OnceLock::new();
    MEMBER.get_or_init(|| {
        Regex::new(r"^(?P<platform>[A-Za-z]+)_(?P<variation>[A-Za-z]+)\.json$")
            .unwrap_or_else(|e| panic!("BUG: invalid archive member pattern: {e}"))
    })
}

/// Platform and variation of a values member, or `None` for anything else.
///
/// Directories in `name` are ignored; only the file name is matched.
pub fn parse_member_name(name: &str) -> Option<(Platform, VariationKind)> {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    let caps = member_pattern().captures(file_name)?;
    let platform = caps["platform"].parse().ok()?;
    let kind = caps["variation"].parse().ok()?;
    Some((platform, kind))
}
