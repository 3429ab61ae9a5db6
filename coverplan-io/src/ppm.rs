//! ASCII PPM (`P3`) images read as four-connected pixel grids.

use std::io::{self, Read};
use std::str::FromStr;

use coverplan_core::{Graph, GraphError, MAX_VERTICES, VertexId};
use thiserror::Error;

use crate::settings::{Rgb, Settings};

const MAGIC: &str = "P3";
const MAX_VALUE: u32 = 255;

/// Errors raised while parsing a PPM image.
#[derive(Debug, Error)]
pub enum PpmError {
    /// The underlying reader failed.
    #[error("failed to read image: {0}")]
    Io(#[from] io::Error),
    /// The image does not start with `P3`.
    #[error("only ASCII P3 images are supported, found magic {found:?}")]
    UnsupportedFormat {
        /// First token of the file.
        found: String,
    },
    /// The header ended before `field` was read.
    #[error("image header is missing the {field}")]
    MissingHeader {
        /// Header field that was expected next.
        field: &'static str,
    },
    /// A token is not a non-negative integer.
    #[error("{token:?} is not a non-negative integer")]
    InvalidNumber {
        /// Offending token.
        token: String,
    },
    /// The maximum component value is not 255.
    #[error("maximum component value must be 255, found {found}")]
    UnsupportedMaxValue {
        /// Declared maximum.
        found: u32,
    },
    /// A component exceeds 255.
    #[error("(R, G, B) components must lie in 0..=255, found {value}")]
    ComponentOutOfRange {
        /// Parsed value.
        value: u32,
    },
    /// Fewer components than `3 · width · height` were present.
    #[error("image declares {expected} pixels but only {found} are complete")]
    MissingPixels {
        /// Declared pixel count.
        expected: usize,
        /// Complete pixels read.
        found: usize,
    },
    /// A pixel colour has no class in the settings.
    #[error("pixel {pixel} has colour {rgb}, which the settings do not map")]
    UnknownColor {
        /// Row-major pixel index.
        pixel: VertexId,
        /// Unmapped colour.
        rgb: Rgb,
    },
    /// The declared dimensions exceed [`MAX_VERTICES`] pixels.
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// The assembled grid was rejected by [`Graph::with_colors`].
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parse a `P3` image into a grid graph coloured through `settings`.
///
/// Pixel `(x, y)` becomes vertex `y · width + x`, adjacent to its north,
/// west, east and south neighbors in that order. `#` starts a comment that
/// runs to the end of the line. Components past the last declared pixel are
/// ignored. Images above [`MAX_VERTICES`] pixels are rejected before any
/// pixel is read.
///
/// # Errors
///
/// Returns a [`PpmError`] for a malformed header, out-of-range or missing
/// components, or a colour absent from `settings`.
///
/// # Examples
///
/// ```rust
/// use coverplan_io::{Settings, parse_ppm_grid};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = Settings::parse("1\n0 255 255 255\n1 0 0 0\n")?;
/// let image = "P3\n2 1\n255\n255 255 255\n0 0 0\n";
/// let graph = parse_ppm_grid(image, &settings)?;
/// assert_eq!(graph.nb_vertices(), 2);
/// assert_eq!(graph.neighbors(0), &[1]);
/// assert_eq!(graph.color(1), Some(1));
/// # Ok(())
/// # }
/// ```
pub fn parse_ppm_grid(text: &str, settings: &Settings) -> Result<Graph, PpmError> {
    let mut tokens = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .flat_map(str::split_whitespace);

    let magic = tokens
        .next()
        .ok_or(PpmError::MissingHeader { field: "magic" })?;
    if magic != MAGIC {
        return Err(PpmError::UnsupportedFormat {
            found: magic.to_owned(),
        });
    }
    let width: usize = header_field(tokens.next(), "width")?;
    let height: usize = header_field(tokens.next(), "height")?;
    let max_value: u32 = header_field(tokens.next(), "maximum value")?;
    if max_value != MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue { found: max_value });
    }
    let nb_pixels = width
        .checked_mul(height)
        .filter(|&count| count <= MAX_VERTICES)
        .ok_or(PpmError::TooLarge { width, height })?;

    let components: Vec<&str> = tokens.collect();
    let pixels = components.chunks_exact(3);
    let complete = pixels.len();
    if complete < nb_pixels {
        return Err(PpmError::MissingPixels {
            expected: nb_pixels,
            found: complete,
        });
    }
    if complete > nb_pixels || !pixels.remainder().is_empty() {
        log::warn!("ignoring components past the {nb_pixels} declared pixels");
    }

    let mut colors = Vec::with_capacity(nb_pixels);
    for (pixel, rgb_tokens) in pixels.take(nb_pixels).enumerate() {
        let &[red, green, blue] = rgb_tokens else {
            continue;
        };
        let rgb = Rgb::new(
            parse_component(red)?,
            parse_component(green)?,
            parse_component(blue)?,
        );
        let class = settings
            .class_of(rgb)
            .ok_or(PpmError::UnknownColor { pixel, rgb })?;
        colors.push(class);
    }

    Ok(Graph::with_colors(grid_adjacency(width, height), colors)?)
}

/// Read and parse a `P3` image from `reader`.
///
/// # Errors
///
/// Returns [`PpmError::Io`] when reading fails, or any parse error from
/// [`parse_ppm_grid`].
pub fn read_ppm_grid<R: Read>(mut reader: R, settings: &Settings) -> Result<Graph, PpmError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_ppm_grid(&text, settings)
}

fn header_field<T: FromStr>(token: Option<&str>, field: &'static str) -> Result<T, PpmError> {
    let token = token.ok_or(PpmError::MissingHeader { field })?;
    parse_number(token)
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, PpmError> {
    token.parse().map_err(|_| PpmError::InvalidNumber {
        token: token.to_owned(),
    })
}

fn parse_component(token: &str) -> Result<u8, PpmError> {
    let value: u32 = parse_number(token)?;
    u8::try_from(value).map_err(|_| PpmError::ComponentOutOfRange { value })
}

/// Four-connected `width × height` grid, neighbors in north, west, east,
/// south order.
fn grid_adjacency(width: usize, height: usize) -> Vec<Vec<VertexId>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut adjacency = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let mut neighbors = Vec::with_capacity(4);
            if y > 0 {
                neighbors.push(vertex - width);
            }
            if x > 0 {
                neighbors.push(vertex - 1);
            }
            if x + 1 < width {
                neighbors.push(vertex + 1);
            }
            if y + 1 < height {
                neighbors.push(vertex + width);
            }
            adjacency.push(neighbors);
        }
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> Settings {
        Settings::parse("1\n0 255 255 255\n1 0 0 0\n2 0 0 255\n").expect("settings should parse")
    }

    #[rstest]
    fn grid_neighbors_are_in_ascending_order() {
        let adjacency = grid_adjacency(3, 3);
        assert_eq!(adjacency.get(4), Some(&vec![1, 3, 5, 7]));
        assert_eq!(adjacency.get(0), Some(&vec![1, 3]));
        assert_eq!(adjacency.get(8), Some(&vec![5, 7]));
    }

    #[rstest]
    fn single_row_and_column_grids_link_in_a_line() {
        assert_eq!(grid_adjacency(3, 1), vec![vec![1], vec![0, 2], vec![1]]);
        assert_eq!(grid_adjacency(1, 2), vec![vec![1], vec![0]]);
        assert_eq!(grid_adjacency(1, 1), vec![Vec::<VertexId>::new()]);
        assert!(grid_adjacency(0, usize::MAX).is_empty());
    }

    #[rstest]
    fn parses_image_with_comments_and_one_component_per_line(settings: Settings) {
        let image = "P3\n# made by hand\n2 2\n255\n0\n0\n0\n255 255 255 # white\n0 0 255\n0 0 0\n";
        let graph = parse_ppm_grid(image, &settings).expect("image should parse");
        assert_eq!(graph.nb_vertices(), 4);
        let colors: Vec<_> = graph.vertices().map(|vertex| graph.color(vertex)).collect();
        assert_eq!(colors, vec![Some(1), Some(0), Some(2), Some(1)]);
        assert_eq!(graph.neighbors(3), &[1, 2]);
        assert_eq!(graph.distance(0, 3), Some(2));
    }

    #[rstest]
    fn zero_width_images_are_empty(settings: Settings) {
        let graph = parse_ppm_grid("P3\n0 4000000000\n255\n", &settings)
            .expect("an empty image should parse");
        assert!(graph.is_empty());
    }

    #[rstest]
    fn trailing_components_are_ignored(settings: Settings) {
        let graph = parse_ppm_grid("P3 1 1 255 0 0 0 9 9 9", &settings).expect("image should parse");
        assert_eq!(graph.nb_vertices(), 1);
    }

    #[rstest]
    #[case("", "missing the magic")]
    #[case("P6\n1 1\n255\n", "found magic \"P6\"")]
    #[case("P3\n2\n", "missing the height")]
    #[case("P3\n1 1\n", "missing the maximum value")]
    #[case("P3\n1 x\n255\n", "\"x\" is not a non-negative integer")]
    #[case("P3\n1 1\n65535\n0 0 0\n", "must be 255, found 65535")]
    #[case("P3\n1 1\n255\n0 300 0\n", "found 300")]
    #[case("P3\n1 1\n255\n0 -1 0\n", "\"-1\" is not a non-negative integer")]
    #[case("P3\n2 1\n255\n0 0 0\n0 0\n", "declares 2 pixels but only 1 are complete")]
    #[case("P3\n1 1\n255\n1 2 3\n", "pixel 0 has colour (1, 2, 3)")]
    #[case("P3\n1099511627776 1048576\n255\n", "dimensions 1099511627776x1048576 are too large")]
    #[case("P3\n257 256\n255\n", "dimensions 257x256 are too large")]
    #[case("P3\n256 256\n255\n0 0 0\n", "declares 65536 pixels but only 1 are complete")]
    fn rejects_malformed_images(settings: Settings, #[case] image: &str, #[case] expected: &str) {
        let err = parse_ppm_grid(image, &settings).expect_err("image should be rejected");
        let message = err.to_string();
        assert!(
            message.contains(expected),
            "{message:?} should contain {expected:?}"
        );
    }
}
