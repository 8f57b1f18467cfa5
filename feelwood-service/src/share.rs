use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const LINE_SHARER: &str = "https://social-plugins.line.me/lineit/share";

static ABSOLUTE_URL: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"(?i)^https?://"));

/// 文章分享链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    /// 被分享的绝对地址（无法确定站点地址时保留相对路径）
    pub url: String,
    pub facebook: String,
    pub line: String,
}

impl ShareLinks {
    /// 为 `target` 生成Facebook和LINE分享链接，标题作为引用文字
    pub fn new(target: &str, site_url: Option<&Url>, quote: &str) -> Option<Self> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }
        let url = resolve_url(target, site_url);

        let facebook = Url::parse_with_params(FACEBOOK_SHARER, [("u", url.as_str()), ("quote", quote)]).ok()?;
        let line = Url::parse_with_params(LINE_SHARER, [("url", url.as_str()), ("text", quote)]).ok()?;

        Some(Self {
            url,
            facebook: facebook.into(),
            line: line.into(),
        })
    }

    /// 文章详情页 `/blog/{slug}` 的分享链接
    pub fn for_post(slug: &str, site_url: Option<&Url>, title: &str) -> Option<Self> {
        if slug.trim().is_empty() {
            return None;
        }
        Self::new(&format!("/blog/{}", slug.trim()), site_url, title)
    }
}

fn resolve_url(path: &str, site_url: Option<&Url>) -> String {
    if matches!(&*ABSOLUTE_URL, Ok(pattern) if pattern.is_match(path)) {
        return path.to_string();
    }
    match site_url.map(|base| base.join(path)) {
        Some(Ok(url)) => url.into(),
        Some(Err(e)) => {
            tracing::warn!(path, error = %e, "Failed to resolve share URL");
            path.to_string()
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Url {
        Url::parse("https://feelwood.example").unwrap()
    }

    #[test]
    fn test_post_link_is_made_absolute() {
        let links = ShareLinks::for_post("spc-floor", Some(&site()), "พื้น SPC").unwrap();
        assert_eq!(links.url, "https://feelwood.example/blog/spc-floor");

        let facebook = Url::parse(&links.facebook).unwrap();
        assert_eq!(facebook.host_str(), Some("www.facebook.com"));
        let pairs: Vec<(String, String)> = facebook.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("u".to_string(), "https://feelwood.example/blog/spc-floor".to_string()),
                ("quote".to_string(), "พื้น SPC".to_string()),
            ]
        );

        let line = Url::parse(&links.line).unwrap();
        assert_eq!(line.path(), "/lineit/share");
        let pairs: Vec<(String, String)> = line.query_pairs().into_owned().collect();
        assert_eq!(pairs[0].1, "https://feelwood.example/blog/spc-floor");
        assert_eq!(pairs[1], ("text".to_string(), "พื้น SPC".to_string()));
    }

    #[test]
    fn test_absolute_target_is_kept() {
        let links = ShareLinks::new("HTTPS://other.example/a", Some(&site()), "t").unwrap();
        assert_eq!(links.url, "HTTPS://other.example/a");
    }

    #[test]
    fn test_relative_target_without_site_url() {
        let links = ShareLinks::for_post("oak", None, "t").unwrap();
        assert_eq!(links.url, "/blog/oak");
        assert!(links.facebook.contains("u=%2Fblog%2Foak"));
    }

    #[test]
    fn test_empty_target_has_no_links() {
        assert_eq!(ShareLinks::new(" ", Some(&site()), "t"), None);
        assert_eq!(ShareLinks::for_post("", Some(&site()), "t"), None);
    }
}
