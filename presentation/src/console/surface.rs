//! Terminal implementation of the UI bridge.
//!
//! `ConsoleSurface` is the one bridge instance of a chat session. Popups
//! and picker sessions are modal: the call blocks on terminal input until
//! the user confirms or cancels, then the result sits in the surface's
//! buffers for the script to consume (`receive_input`, `receive_picked`).

use crate::console::image_render;
use crate::console::picker::{parse_selection, SelectionInput};
use crate::console::popup::render_popup;
use colored::Colorize;
use parley_application::{BridgeError, MediaLibraryPort, UiBridgePort};
use parley_domain::{ImageRef, InteractionState, PopupKind};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::warn;

const POPUP_WIDTH: usize = 56;

/// Mutable bridge state behind one mutex.
#[derive(Default)]
struct BridgeState {
    interaction: InteractionState,
    canceled: bool,
    input: Option<String>,
    picked: Vec<ImageRef>,
}

/// Terminal surface implementing [`UiBridgePort`].
pub struct ConsoleSurface {
    library: Arc<dyn MediaLibraryPort>,
    image_width: u16,
    state: Mutex<BridgeState>,
}

impl ConsoleSurface {
    pub fn new(library: Arc<dyn MediaLibraryPort>) -> Self {
        Self {
            library,
            image_width: 48,
            state: Mutex::new(BridgeState::default()),
        }
    }

    /// Maximum width, in terminal columns, of rendered images.
    pub fn with_image_width(mut self, width: u16) -> Self {
        self.image_width = width;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BridgeState> {
        // A poisoned lock only happens after a panic mid-interaction;
        // the state is plain data, so continue with it.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read one line, mapping Ctrl+C / Ctrl+D to cancellation (`None`).
    fn read_line(prompt: &str) -> Result<Option<String>, BridgeError> {
        let mut editor =
            DefaultEditor::new().map_err(|e| BridgeError::new(e.to_string()))?;
        match editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(BridgeError::new(e.to_string())),
        }
    }

    fn run_picker_loop(&self, count: usize) -> Result<PickerResult, BridgeError> {
        let images = self
            .library
            .list_images()
            .map_err(|e| BridgeError::new(e.to_string()))?;

        if images.is_empty() {
            println!(
                "{}",
                format!("(media library at {} is empty)", self.library.root().display())
                    .dimmed()
            );
            return Ok(PickerResult::Selected(Vec::new()));
        }

        println!("{}", format_listing(&images));
        println!(
            "{}",
            format!(
                "Select up to {} image(s) by number, in order. Empty line cancels.",
                count
            )
            .dimmed()
        );

        loop {
            match Self::read_line("pick> ")? {
                None => return Ok(PickerResult::Canceled),
                Some(line) => match parse_selection(&line, images.len(), count) {
                    Ok(SelectionInput::Canceled) => return Ok(PickerResult::Canceled),
                    Ok(SelectionInput::Indices(indices)) => {
                        let selected = indices
                            .into_iter()
                            .map(|i| images[i].clone())
                            .collect();
                        return Ok(PickerResult::Selected(selected));
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                },
            }
        }
    }
}

enum PickerResult {
    Selected(Vec<ImageRef>),
    Canceled,
}

/// Numbered listing of the library shown before selection input.
fn format_listing(images: &[ImageRef]) -> String {
    images
        .iter()
        .enumerate()
        .map(|(i, image)| format!("  {:>3}. {}", i + 1, image.file_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the text resource behind a popup.
fn load_popup_text(path: &Path) -> Result<String, BridgeError> {
    std::fs::read_to_string(path)
        .map_err(|e| BridgeError::new(format!("failed to read {}: {}", path.display(), e)))
}

impl UiBridgePort for ConsoleSurface {
    fn print_text(&self, text: &str) {
        println!("{}", text.cyan());
    }

    fn print_image(&self, image: &ImageRef) {
        match image_render::render_image(image.path(), self.image_width) {
            Ok(rendered) => {
                print!("{}", rendered);
                println!("{}", image_render::caption(image.path()).dimmed());
            }
            Err(e) => {
                // Best-effort: degrade to a caption instead of failing
                warn!("could not render image: {}", e);
                println!("{}", image_render::caption(image.path()).dimmed());
            }
        }
    }

    fn is_canceled(&self) -> bool {
        self.lock().canceled
    }

    fn start_popup_input(&self, prompt_path: &Path) -> Result<(), BridgeError> {
        {
            let mut state = self.lock();
            state
                .interaction
                .begin_popup(PopupKind::Input)
                .map_err(|e| BridgeError::new(e.to_string()))?;
            state.canceled = false;
            state.input = None;
        }

        let result = (|| {
            let prompt = load_popup_text(prompt_path)?;
            println!("{}", render_popup("Input", prompt.trim_end(), POPUP_WIDTH));
            Self::read_line("> ")
        })();

        let mut state = self.lock();
        state.interaction.finish();
        match result {
            Ok(Some(line)) => {
                state.input = Some(line);
                Ok(())
            }
            Ok(None) => {
                state.canceled = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn receive_input(&self) -> Option<String> {
        self.lock().input.take()
    }

    fn start_popup_message(&self, message_path: &Path) -> Result<(), BridgeError> {
        {
            let mut state = self.lock();
            state
                .interaction
                .begin_popup(PopupKind::Message)
                .map_err(|e| BridgeError::new(e.to_string()))?;
            state.canceled = false;
        }

        let result = (|| {
            let message = load_popup_text(message_path)?;
            println!("{}", render_popup("Message", message.trim_end(), POPUP_WIDTH));
            Self::read_line("[Enter to dismiss] ")
        })();

        let mut state = self.lock();
        state.interaction.finish();
        match result {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                state.canceled = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn start_pick_from_library(&self, count: usize) -> Result<(), BridgeError> {
        {
            let mut state = self.lock();
            if count == 0 {
                state.canceled = false;
                state.picked.clear();
                return Ok(());
            }
            state
                .interaction
                .begin_picker(count)
                .map_err(|e| BridgeError::new(e.to_string()))?;
            state.canceled = false;
            state.picked.clear();
        }

        let result = self.run_picker_loop(count);

        let mut state = self.lock();
        state.interaction.finish();
        match result {
            Ok(PickerResult::Selected(images)) => {
                state.picked = images;
                Ok(())
            }
            Ok(PickerResult::Canceled) => {
                state.canceled = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn receive_picked(&self) -> Vec<ImageRef> {
        std::mem::take(&mut self.lock().picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_application::MediaLibraryError;
    use std::path::PathBuf;

    struct StubLibrary {
        root: PathBuf,
        images: Vec<ImageRef>,
    }

    impl MediaLibraryPort for StubLibrary {
        fn list_images(&self) -> Result<Vec<ImageRef>, MediaLibraryError> {
            Ok(self.images.clone())
        }

        fn root(&self) -> &Path {
            &self.root
        }
    }

    fn make_surface(images: Vec<ImageRef>) -> ConsoleSurface {
        ConsoleSurface::new(Arc::new(StubLibrary {
            root: PathBuf::from("/library"),
            images,
        }))
    }

    #[test]
    fn test_fresh_surface_not_canceled() {
        let surface = make_surface(Vec::new());
        assert!(!surface.is_canceled());
        assert!(surface.receive_input().is_none());
        assert!(surface.receive_picked().is_empty());
    }

    #[test]
    fn test_receive_picked_consumes_once() {
        let surface = make_surface(Vec::new());
        surface.lock().picked = vec![ImageRef::new("a.png"), ImageRef::new("b.png")];

        let first = surface.receive_picked();
        assert_eq!(first.len(), 2);
        assert!(surface.receive_picked().is_empty());
    }

    #[test]
    fn test_receive_input_consumes_once() {
        let surface = make_surface(Vec::new());
        surface.lock().input = Some("Ada".into());

        assert_eq!(surface.receive_input().as_deref(), Some("Ada"));
        assert!(surface.receive_input().is_none());
    }

    #[test]
    fn test_pick_zero_is_empty_session() {
        let surface = make_surface(vec![ImageRef::new("a.png")]);
        surface.start_pick_from_library(0).unwrap();
        assert!(!surface.is_canceled());
        assert!(surface.receive_picked().is_empty());
    }

    #[test]
    fn test_print_text_never_errors() {
        let surface = make_surface(Vec::new());
        surface.print_text("plain");
        surface.print_text("");
    }

    #[test]
    fn test_print_image_degrades_to_caption() {
        // Undecodable path must not panic or error
        let surface = make_surface(Vec::new());
        surface.print_image(&ImageRef::new("/no/such/image.png"));
    }

    #[test]
    fn test_format_listing_is_one_based() {
        let listing = format_listing(&[ImageRef::new("/lib/a.png"), ImageRef::new("/lib/b.png")]);
        let lines: Vec<&str> = listing.lines().collect();
        assert!(lines[0].contains("1. a.png"));
        assert!(lines[1].contains("2. b.png"));
    }

    #[test]
    fn test_load_popup_text_missing_file() {
        let err = load_popup_text(Path::new("/no/such/prompt.txt")).unwrap_err();
        assert!(err.message.contains("prompt.txt"));
    }

    #[test]
    fn test_load_popup_text_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "What is your name?\n").unwrap();
        assert_eq!(load_popup_text(&path).unwrap(), "What is your name?\n");
    }
}
