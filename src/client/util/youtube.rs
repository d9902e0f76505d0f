use std::sync::LazyLock;

use regex::Regex;

/// Matches watch, short, embed and shortened YouTube links and captures the video id.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|shorts/|v/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("fail to create a regex for YouTube links")
});

/// Extracts the 11-character video id from a YouTube link.
pub fn video_id(link: &str) -> Option<&str> {
    VIDEO_ID_PATTERN
        .captures(link.trim())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Embeddable player URL for a YouTube link, or `None` when the link cannot be parsed.
pub fn embed_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://www.youtube.com/embed/{}", id))
}

/// Preview thumbnail for a YouTube link.
pub fn thumbnail_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_link_shapes() {
        let links = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=10",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        ];

        for link in links {
            assert_eq!(video_id(link), Some("dQw4w9WgXcQ"), "{}", link);
        }
    }

    #[test]
    fn embed_url_for_valid_link() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn unparseable_links_have_no_preview() {
        assert_eq!(embed_url("https://vimeo.com/123456"), None);
        assert_eq!(embed_url("https://youtu.be/short"), None);
        assert_eq!(thumbnail_url(""), None);
    }
}
