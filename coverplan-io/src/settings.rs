//! Colour-class settings: the image scale and the mapping from pixel colours
//! to vertex colour classes.

use std::collections::BTreeMap;
use std::io::{self, Read};

use thiserror::Error;

use crate::lines::content_lines;

/// An 8-bit RGB pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component.
    pub red: u8,
    /// Green component.
    pub green: u8,
    /// Blue component.
    pub blue: u8,
}

impl Rgb {
    /// Build a colour from its components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Packed lookup key `1_000_000·R + 1_000·G + B`.
    #[must_use]
    pub fn key(self) -> u32 {
        1_000_000 * u32::from(self.red) + 1_000 * u32::from(self.green) + u32::from(self.blue)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Errors raised while parsing a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The underlying reader failed.
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    /// The file holds no scale line.
    #[error("settings file is missing the scale line")]
    MissingScale,
    /// The scale line is not a non-negative integer.
    #[error("line {line}: scale must be a non-negative integer, found {token:?}")]
    InvalidScale {
        /// 1-based line number.
        line: usize,
        /// Offending text.
        token: String,
    },
    /// A colour line does not hold exactly four tokens.
    #[error("line {line}: expected `<index> <R> <G> <B>`, found {found} tokens")]
    WrongTokenCount {
        /// 1-based line number.
        line: usize,
        /// Number of tokens present.
        found: usize,
    },
    /// A token is not an integer.
    #[error("line {line}: {token:?} is not an integer")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// The colour class index is negative or too large.
    #[error("line {line}: colour index must be a non-negative integer, found {value}")]
    InvalidIndex {
        /// 1-based line number.
        line: usize,
        /// Parsed value.
        value: i64,
    },
    /// A colour component lies outside `0..=255`.
    #[error("line {line}: (R, G, B) components must lie in 0..=255, found {value}")]
    ComponentOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Parsed value.
        value: i64,
    },
}

/// Parsed settings file.
///
/// # Examples
///
/// ```rust
/// use coverplan_io::{Rgb, Settings};
///
/// # fn main() -> Result<(), coverplan_io::SettingsError> {
/// let settings = Settings::parse("# scale\n2\n0 255 255 255\n1 0 0 0\n")?;
/// assert_eq!(settings.scale, 2);
/// assert_eq!(settings.class_of(Rgb::new(0, 0, 0)), Some(1));
/// assert_eq!(settings.class_of(Rgb::new(1, 2, 3)), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Reduction scale applied when the image was produced. Informational.
    pub scale: u32,
    /// Colour class per [`Rgb::key`].
    pub pixel_classes: BTreeMap<u32, u32>,
}

impl Settings {
    /// Parse settings text.
    ///
    /// The first content line is the scale; each further line is
    /// `<index> <R> <G> <B>`. A colour listed twice keeps its last index.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] describing the first malformed line.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let mut lines = content_lines(text);
        let (scale_line, scale_text) = lines.next().ok_or(SettingsError::MissingScale)?;
        let scale = scale_text
            .parse()
            .map_err(|_| SettingsError::InvalidScale {
                line: scale_line,
                token: scale_text.to_owned(),
            })?;

        let mut pixel_classes = BTreeMap::new();
        for (line, content) in lines {
            let (class, rgb) = parse_colour_line(line, content)?;
            if let Some(previous) = pixel_classes.insert(rgb.key(), class) {
                log::warn!("line {line}: colour {rgb} remapped from class {previous} to {class}");
            }
        }
        Ok(Self {
            scale,
            pixel_classes,
        })
    }

    /// Read and parse settings from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when reading fails, or any parse error
    /// from [`Settings::parse`].
    pub fn read<R: Read>(mut reader: R) -> Result<Self, SettingsError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Colour class assigned to `rgb`, if any.
    #[must_use]
    pub fn class_of(&self, rgb: Rgb) -> Option<u32> {
        self.pixel_classes.get(&rgb.key()).copied()
    }
}

fn parse_colour_line(line: usize, content: &str) -> Result<(u32, Rgb), SettingsError> {
    let values = content
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SettingsError::InvalidNumber {
                    line,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let &[index, red, green, blue] = values.as_slice() else {
        return Err(SettingsError::WrongTokenCount {
            line,
            found: values.len(),
        });
    };
    let class =
        u32::try_from(index).map_err(|_| SettingsError::InvalidIndex { line, value: index })?;
    let component = |value: i64| {
        u8::try_from(value).map_err(|_| SettingsError::ComponentOutOfRange { line, value })
    };
    Ok((class, Rgb::new(component(red)?, component(green)?, component(blue)?)))
}
