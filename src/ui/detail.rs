/// Detail/gallery split screen
///
/// Left half: read-only scrollable rendering of the selected post. Right
/// half: scrollable grid of image slots in ascending slot order. Tapping a
/// slot activates it and opens the picker dialog.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Color, Element, Length};
use iced_aw::Wrap;

use crate::state::gallery::Gallery;
use crate::state::posts::Post;
use crate::ui;
use crate::Message;

pub fn view<'a>(post: &'a Post, gallery: &'a Gallery) -> Element<'a, Message> {
    let detail = scrollable(
        column![text(&post.title).size(28), text(&post.body).size(16)]
            .spacing(16)
            .padding(20),
    );

    let left = container(detail)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(|_theme| pane_style(Color::from_rgba(0.5, 0.5, 0.5, 0.2)));

    let tile_size = ui::TILE_SIZE * gallery.zoom;
    let tiles: Vec<Element<Message>> = gallery
        .slots()
        .map(|(index, name)| ui::image_tile(name, tile_size, Message::SlotTapped(index)))
        .collect();

    let grid = Wrap::with_elements(tiles)
        .spacing(10.0)
        .line_spacing(10.0)
        .padding(10.0);

    let right = container(
        scrollable(grid).direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::new(),
            horizontal: scrollable::Scrollbar::new(),
        }),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .style(|_theme| pane_style(Color::from_rgba(0.0, 0.3, 0.8, 0.2)));

    column![
        row![button("< Back").on_press(Message::BackToPosts).padding(8)].padding(8),
        row![left, right].height(Length::Fill),
    ]
    .into()
}

fn pane_style(background: Color) -> container::Style {
    container::Style {
        background: Some(background.into()),
        ..container::Style::default()
    }
}
