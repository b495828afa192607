use iced::{Element, Task, Theme};

// Declare the application modules
mod net;
mod state;
mod ui;

use state::gallery::{Gallery, GalleryConfig};
use state::posts::{grouped_by_author, Post};

/// Main application state
struct Postboard {
    /// Posts fetched from the remote source (empty until the fetch lands)
    posts: Vec<Post>,
    /// Which screen is showing
    screen: Screen,
    /// Image catalog and default slot assignments for new galleries
    gallery_config: GalleryConfig,
    /// Status message to display to the user
    status: String,
}

/// The two screens of the application
enum Screen {
    /// Grouped post list
    Posts,
    /// Detail/gallery split for one selected post
    Detail { post: Post, gallery: Gallery },
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The startup fetch completed
    PostsFetched(Result<Vec<Post>, net::FetchError>),
    /// User tapped a post entry in the grouped list
    PostSelected(i64),
    /// User left the detail screen
    BackToPosts,
    /// User tapped a gallery slot
    SlotTapped(usize),
    /// User tapped a catalog image in the picker dialog
    ImagePicked(String),
    /// User closed the picker dialog
    PickerDismissed,
}

impl Postboard {
    /// Create a new instance and kick off the one-time post fetch
    fn new() -> (Self, Task<Message>) {
        let app = Postboard {
            posts: Vec::new(),
            screen: Screen::Posts,
            gallery_config: GalleryConfig::default(),
            status: "Fetching posts...".to_string(),
        };

        (
            app,
            Task::perform(
                net::fetch_posts(net::POSTS_URL.to_string()),
                Message::PostsFetched,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PostsFetched(Ok(posts)) => {
                let authors = grouped_by_author(&posts).len();
                println!("📬 Fetched {} posts from {} authors", posts.len(), authors);

                self.status = format!("Ready. {} posts from {} authors.", posts.len(), authors);
                self.posts = posts;
            }
            Message::PostsFetched(Err(err)) => {
                // Degrade to an empty list; there is no error surface
                eprintln!("⚠️  Post fetch failed: {err}");
                self.status = "Ready. 0 posts.".to_string();
            }
            Message::PostSelected(id) => {
                if let Some(post) = self.posts.iter().find(|p| p.id == id) {
                    self.screen = Screen::Detail {
                        post: post.clone(),
                        gallery: Gallery::new(&self.gallery_config),
                    };
                }
            }
            Message::BackToPosts => {
                // Drops the gallery and its slot assignments
                self.screen = Screen::Posts;
            }
            Message::SlotTapped(index) => {
                if let Screen::Detail { gallery, .. } = &mut self.screen {
                    gallery.select_slot(index);
                }
            }
            Message::ImagePicked(name) => {
                if let Screen::Detail { gallery, .. } = &mut self.screen {
                    gallery.apply_pick(name);
                }
            }
            Message::PickerDismissed => {
                if let Screen::Detail { gallery, .. } = &mut self.screen {
                    gallery.dismiss_picker();
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Posts => ui::posts_list::view(&self.posts, &self.status),
            Screen::Detail { post, gallery } => {
                let screen = ui::detail::view(post, gallery);

                if gallery.picker_open {
                    ui::picker::overlay(screen, &self.gallery_config.catalog, gallery)
                } else {
                    screen
                }
            }
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Postboard", Postboard::update, Postboard::view)
        .theme(Postboard::theme)
        .centered()
        .run_with(Postboard::new)
}
