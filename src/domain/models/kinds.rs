//! Closed variants for the text settings that select an engine or format.
//!
//! Each type parses leniently from its configuration text (trimmed,
//! case-insensitive, aliases allowed) and keeps anything unrecognised in an
//! `Unknown` variant so the original text is never lost.
//!
//! Known values display and serialize as their canonical text, so a configured
//! `.jpg` is reported as `jpg`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

macro_rules! setting_kind {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $canonical:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Text that matched no known variant, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Canonical configuration text for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $canonical, )+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                Ok(match normalized.as_str() {
                    $( $canonical $(| $alias)* => Self::$variant, )+
                    _ => Self::Unknown(s.to_string()),
                })
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s.parse() {
                    Ok(kind) => kind,
                    Err(never) => match never {},
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

setting_kind! {
    /// Which waifu2x implementation performs the upscaling.
    Waifu2xType {
        /// waifu2x-caffe (Windows CUI build)
        Caffe => "caffe" | "waifu2x-caffe" | "waifu2x_caffe",
        /// waifu2x-converter-cpp
        Converter => "conv" | "converter" | "waifu2x-converter-cpp",
        /// waifu2x-ncnn-vulkan
        Vulkan => "vulkan" | "ncnn-vulkan" | "waifu2x-ncnn-vulkan",
    }
}

setting_kind! {
    /// Compute backend handed to the upscaler.
    ProcessType {
        Cudnn => "cudnn",
        Gpu => "gpu",
        Cpu => "cpu",
    }
}

setting_kind! {
    /// Image format used for extracted and upscaled frames.
    ExtensionType {
        Jpg => "jpg" | ".jpg" | "jpeg" | ".jpeg",
        Png => "png" | ".png",
    }
}

setting_kind! {
    /// Audio container/codec used when re-attaching the soundtrack.
    AudioType {
        Mp3 => "mp3" | ".mp3",
        Aac => "aac" | ".aac",
        Wav => "wav" | ".wav",
        Flac => "flac" | ".flac",
    }
}
