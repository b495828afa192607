/// Image picker dialog
///
/// Modal overlay shown while a gallery slot is active. Tapping a catalog
/// image only emits a message; the update loop owns the slot map and
/// applies the assignment. The dialog stays open across picks until the
/// close control (or the backdrop) dismisses it.

use iced::widget::{
    button, center, column, container, horizontal_rule, mouse_area, opaque, scrollable, stack,
    text, Row,
};
use iced::{Alignment, Color, Element};

use crate::state::gallery::Gallery;
use crate::ui;
use crate::Message;

/// Layer the picker dialog over the given base screen.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    catalog: &'a [String],
    gallery: &'a Gallery,
) -> Element<'a, Message> {
    let tiles: Vec<Element<Message>> = catalog
        .iter()
        .map(|name| ui::image_tile(name, ui::TILE_SIZE, Message::ImagePicked(name.clone())))
        .collect();

    let strip = scrollable(Row::with_children(tiles).spacing(10))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ));

    let caption = match &gallery.proposed_image {
        Some(name) => text(format!("Current: {name}")).size(14),
        None => text("No image assigned").size(14),
    };

    let card = container(
        column![
            text("Select an Image").size(20),
            horizontal_rule(1),
            strip,
            caption,
            button("Close").on_press(Message::PickerDismissed).padding(8),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(480)
    .padding(16)
    .style(container::rounded_box);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(card)).style(|_theme| backdrop_style()))
                .on_press(Message::PickerDismissed)
        )
    ]
    .into()
}

fn backdrop_style() -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
