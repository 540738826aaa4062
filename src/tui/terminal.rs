//! Crossterm event loop for the terminal UI.

use crate::error::Result;
use crate::tasks::{TaskList, TaskStore};
use crate::tui::{Control, Key, Model};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style, terminal};
use std::io::{self, Write};
use std::panic;

/// Puts the terminal back the way it was when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on a failure drops the guard, which leaves raw mode.
        let guard = Self;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

/// Install a panic hook that restores the terminal before the previous hook
/// prints anything.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));
}

/// Translate a crossterm key event into a UI key.
///
/// Returns `None` for keys the UI ignores.
pub fn map_key(event: KeyEvent) -> Option<Key> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char('c') if ctrl => Some(Key::Quit),
        KeyCode::Char(c) if !ctrl && !alt => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

fn draw(out: &mut impl Write, model: &Model) -> Result<()> {
    let screen = model.view()?;
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
    // Raw mode does not turn \n into a carriage return plus line feed.
    queue!(out, style::Print(screen.replace('\n', "\r\n")))?;
    out.flush()?;
    Ok(())
}

/// Run the terminal UI until the user presses ctrl-c.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven or the screen cannot be
/// rendered. Task list errors are shown on screen instead.
pub fn run<S: TaskStore>(list: &TaskList<S>) -> Result<()> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    let mut model = Model::new(list);
    draw(&mut stdout, &model)?;

    loop {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let Some(key) = map_key(key_event) else {
                    continue;
                };
                if model.update(list, key) == Control::Quit {
                    tracing::info!("terminal UI closed");
                    return Ok(());
                }
                draw(&mut stdout, &model)?;
            }
            Event::Resize(..) => draw(&mut stdout, &model)?,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
        map_key(KeyEvent::new(code, modifiers))
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("terminal went away"))
        }
    }

    #[test]
    fn test_failed_enter_leaves_raw_mode_off() {
        let result = TerminalGuard::enter(&mut BrokenWriter);

        assert!(result.is_err());
        assert!(!terminal::is_raw_mode_enabled().unwrap_or(false));
    }

    #[test]
    fn test_map_navigation_keys() {
        assert_eq!(press(KeyCode::Up, KeyModifiers::NONE), Some(Key::Up));
        assert_eq!(press(KeyCode::Down, KeyModifiers::NONE), Some(Key::Down));
        assert_eq!(press(KeyCode::Left, KeyModifiers::NONE), Some(Key::Left));
        assert_eq!(press(KeyCode::Right, KeyModifiers::NONE), Some(Key::Right));
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Some(Key::Tab));
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), Some(Key::Backspace));
    }

    #[test]
    fn test_map_ctrl_c_quits() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Quit));
    }

    #[test]
    fn test_map_typed_characters() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::NONE), Some(Key::Char('c')));
        assert_eq!(press(KeyCode::Char('Q'), KeyModifiers::SHIFT), Some(Key::Char('Q')));
    }

    #[test]
    fn test_map_ignores_other_chords() {
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::CONTROL), None);
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::ALT), None);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), None);
        assert_eq!(press(KeyCode::F(1), KeyModifiers::NONE), None);
    }
}
