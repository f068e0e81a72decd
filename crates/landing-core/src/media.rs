//! Feature Media
//!
//! Closed set of render strategies for the media slot next to a disclosure
//! list.

use serde::{Deserialize, Serialize};

/// Intrinsic width of rendered media, in pixels
pub const MEDIA_WIDTH: u32 = 500;

/// Intrinsic height of rendered media, in pixels
pub const MEDIA_HEIGHT: u32 = 500;

/// Media attached to a disclosure item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Video {
        source: String,
        /// MIME type, e.g. `video/webm`
        format: String,
    },
    Image {
        source: String,
        alt: String,
    },
}

impl Media {
    pub fn video(source: impl Into<String>, format: impl Into<String>) -> Self {
        Media::Video {
            source: source.into(),
            format: format.into(),
        }
    }

    pub fn image(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Media::Image {
            source: source.into(),
            alt: alt.into(),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Media::Video { source, .. } | Media::Image { source, .. } => source,
        }
    }
}

/// Playback attributes for a video slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoPlayback {
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
    pub inline: bool,
    pub controls: bool,
}

/// Feature videos start on their own, silently, looping inline.
pub const FEATURE_PLAYBACK: VideoPlayback = VideoPlayback {
    autoplay: true,
    muted: true,
    looped: true,
    inline: true,
    controls: true,
};

/// What to render in the media slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSlot<'a> {
    Video {
        source: &'a str,
        format: &'a str,
        playback: VideoPlayback,
        width: u32,
        height: u32,
    },
    Image {
        source: &'a str,
        alt: &'a str,
        width: u32,
        height: u32,
    },
    /// Empty box keeping the layout stable
    Placeholder,
}

impl<'a> MediaSlot<'a> {
    pub fn for_media(media: Option<&'a Media>) -> Self {
        match media {
            Some(Media::Video { source, format }) => MediaSlot::Video {
                source,
                format,
                playback: FEATURE_PLAYBACK,
                width: MEDIA_WIDTH,
                height: MEDIA_HEIGHT,
            },
            Some(Media::Image { source, alt }) => MediaSlot::Image {
                source,
                alt,
                width: MEDIA_WIDTH,
                height: MEDIA_HEIGHT,
            },
            None => MediaSlot::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_slot_autoplays_muted_inline() {
        let media = Media::video("/newsletter.webm", "video/webm");
        match MediaSlot::for_media(Some(&media)) {
            MediaSlot::Video { source, format, playback, .. } => {
                assert_eq!(source, "/newsletter.webm");
                assert_eq!(format, "video/webm");
                assert!(playback.autoplay && playback.muted && playback.looped && playback.inline);
            }
            other => panic!("expected video slot, got {other:?}"),
        }
    }

    #[test]
    fn test_image_slot_has_fixed_size() {
        let media = Media::image("/computer.jpg", "A computer");
        assert_eq!(
            MediaSlot::for_media(Some(&media)),
            MediaSlot::Image {
                source: "/computer.jpg",
                alt: "A computer",
                width: 500,
                height: 500,
            }
        );
    }

    #[test]
    fn test_missing_media_is_placeholder() {
        assert_eq!(MediaSlot::for_media(None), MediaSlot::Placeholder);
    }

    #[test]
    fn test_media_json_is_tagged() {
        let media: Media = serde_json::from_str(
            r#"{"kind": "video", "source": "/a.webm", "format": "video/webm"}"#,
        )
        .unwrap();
        assert_eq!(media, Media::video("/a.webm", "video/webm"));
        assert_eq!(media.source(), "/a.webm");
    }
}
