/// UI module
///
/// Each screen lives in its own file:
/// - The grouped post list (posts_list.rs)
/// - The detail/gallery split screen (detail.rs)
/// - The image picker dialog overlay (picker.rs)

use std::path::PathBuf;

use iced::widget::{button, image};
use iced::{ContentFit, Element};

use crate::Message;

pub mod detail;
pub mod picker;
pub mod posts_list;

/// Base edge length of a gallery tile, before zoom
pub const TILE_SIZE: f32 = 100.0;

/// Resolve an image name to its bundled asset path.
///
/// Names with no matching file under assets/ simply render as an empty
/// tile; there is no broken-image fallback.
fn asset_path(name: &str) -> PathBuf {
    PathBuf::from("assets").join(format!("{name}.png"))
}

/// A tappable square tile showing the named image.
fn image_tile(name: &str, size: f32, on_tap: Message) -> Element<'static, Message> {
    let picture = image(image::Handle::from_path(asset_path(name)))
        .width(size)
        .height(size)
        .content_fit(ContentFit::Contain);

    button(picture)
        .on_press(on_tap)
        .padding(8)
        .style(button::text)
        .into()
}
