/// Grouped post list screen
///
/// One section per author identifier, ascending, with an entry per post in
/// arrival order. An empty post list renders only the chrome (title and
/// status line), no sections.

use iced::widget::{button, column, scrollable, text, Column};
use iced::{Element, Length};

use crate::state::posts::{grouped_by_author, Post};
use crate::Message;

pub fn view<'a>(posts: &'a [Post], status: &'a str) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(24).padding(20);

    for (author_id, group) in grouped_by_author(posts) {
        let mut entries = Column::new().spacing(4);
        for post in group {
            entries = entries.push(
                button(text(&post.title))
                    .on_press(Message::PostSelected(post.id))
                    .width(Length::Fill)
                    .style(button::text),
            );
        }

        sections = sections.push(
            column![text(format!("User {author_id}")).size(20), entries].spacing(8),
        );
    }

    column![
        text("Posts").size(32),
        scrollable(sections).height(Length::Fill).width(Length::Fill),
        text(status).size(14),
    ]
    .spacing(16)
    .padding(20)
    .into()
}
