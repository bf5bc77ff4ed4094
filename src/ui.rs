//! Terminal presentation layer
//!
//! Thin display wrapper: every panel is a pure derivation from the current
//! session state, rendered after each action. The interactive loop reads one
//! command per line; a request runs to completion before the next prompt, so
//! a second generate can never start while one is in flight.

use crate::models::PartField;
use crate::session::{CopyTarget, Session};
use crate::Result;
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";
const HELP: &str = "\
Ketik ide Anda untuk membuat prompt, atau gunakan perintah:
  :edit <field> <teks>   ubah satu field (background/subjek/pose/kamera)
  :copy <id|en|json>     salin ke clipboard
  :show                  tampilkan hasil saat ini
  :help                  tampilkan bantuan ini
  :quit                  keluar";

/// Render the whole session to one displayable block.
pub fn render(session: &Session) -> String {
    let mut out = String::new();

    if let Some(message) = session.error() {
        out.push_str(&format!("! {}\n\n", message));
    }

    if !session.has_results() {
        out.push_str("Belum ada hasil. Masukkan ide sederhana Anda.\n");
        return out;
    }

    out.push_str(&section(
        "Bahasa Indonesia",
        session.copy_label(CopyTarget::NativeAll),
        &session.combined_native_text(),
    ));

    let translated_body = if session.is_translating() {
        "Menerjemahkan...".to_string()
    } else {
        session.combined_translated_text()
    };
    out.push_str(&section(
        "English (Final)",
        session.copy_label(CopyTarget::TranslatedAll),
        &translated_body,
    ));

    let final_json = session.final_json();
    if !final_json.is_empty() {
        out.push_str(&section(
            "Hasil Akhir (JSON)",
            session.copy_label(CopyTarget::FinalJson),
            &final_json,
        ));
    }

    out
}

fn section(title: &str, copy_label: Option<&'static str>, body: &str) -> String {
    let header = match copy_label {
        Some(label) => format!("=== {} [{}] ===", title, label),
        None => format!("=== {} ===", title),
    };
    format!("{}\n{}\n\n", header, body)
}

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Generate(String),
    Edit(PartField, String),
    Copy(CopyTarget),
    Show,
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if !line.starts_with(':') {
        return Command::Generate(line.to_string());
    }

    let mut words = line.split_whitespace();
    match words.next() {
        Some(":quit") | Some(":q") => Command::Quit,
        Some(":show") => Command::Show,
        Some(":help") => Command::Help,
        Some(":edit") => {
            let field = words.next().and_then(PartField::parse);
            let value = words.collect::<Vec<_>>().join(" ");
            match field {
                Some(field) if !value.is_empty() => Command::Edit(field, value),
                _ => Command::Invalid(
                    "Gunakan: :edit <background|subjek|pose|kamera> <teks>".to_string(),
                ),
            }
        }
        Some(":copy") => match words.next() {
            Some("id") => Command::Copy(CopyTarget::NativeAll),
            Some("en") => Command::Copy(CopyTarget::TranslatedAll),
            Some("json") => Command::Copy(CopyTarget::FinalJson),
            _ => Command::Invalid("Gunakan: :copy <id|en|json>".to_string()),
        },
        _ => Command::Invalid(format!("Perintah tidak dikenal: {}", line)),
    }
}

/// Read-eval-render loop over stdin. Returns when the user quits or input
/// reaches EOF.
pub async fn run_interactive(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Prompt Generator Image");
    println!("{}", HELP);

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Command::Quit => return Ok(()),
            Command::Help => println!("{}", HELP),
            Command::Show => println!("{}", render(session)),
            Command::Generate(idea) => {
                session.generate(&idea).await;
                println!("{}", render(session));
            }
            Command::Edit(field, value) => {
                match session.edit_field(field, value) {
                    Ok(()) => println!("{}", render(session)),
                    Err(e) => println!("! {}", e),
                }
            }
            Command::Copy(target) => {
                session.copy(target);
                println!("{}", render(session));
            }
            Command::Invalid(message) => println!("! {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MockPromptClient, MockTranslationClient};
    use crate::clipboard::MockClipboard;
    use crate::models::PromptParts;
    use crate::session::SessionServices;

    fn empty_session() -> Session {
        Session::with_services(SessionServices {
            generator: Box::new(MockPromptClient::new()),
            translator: Box::new(MockTranslationClient::new()),
            clipboard: Box::new(MockClipboard::new()),
        })
    }

    #[test]
    fn test_parse_plain_text_is_generate() {
        assert_eq!(
            parse_command("gadis membaca buku"),
            Command::Generate("gadis membaca buku".to_string())
        );
    }

    #[test]
    fn test_parse_edit_command() {
        assert_eq!(
            parse_command(":edit pose berdiri di pantai"),
            Command::Edit(PartField::Pose, "berdiri di pantai".to_string())
        );
        assert!(matches!(parse_command(":edit pose"), Command::Invalid(_)));
        assert!(matches!(
            parse_command(":edit lighting redup"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_copy_targets() {
        assert_eq!(parse_command(":copy id"), Command::Copy(CopyTarget::NativeAll));
        assert_eq!(
            parse_command(":copy en"),
            Command::Copy(CopyTarget::TranslatedAll)
        );
        assert_eq!(
            parse_command(":copy json"),
            Command::Copy(CopyTarget::FinalJson)
        );
        assert!(matches!(parse_command(":copy all"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":quit"), Command::Quit);
        assert_eq!(parse_command(":q"), Command::Quit);
    }

    #[test]
    fn test_render_empty_session_shows_placeholder() {
        let session = empty_session();
        let view = render(&session);
        assert!(view.contains("Belum ada hasil"));
        assert!(!view.contains("==="));
    }

    #[tokio::test]
    async fn test_render_after_generation_shows_all_panels() {
        let mut session = Session::with_services(SessionServices {
            generator: Box::new(MockPromptClient::new().with_parts_response(PromptParts::new(
                "taman".to_string(),
                "gadis".to_string(),
                "duduk".to_string(),
                "85mm".to_string(),
            ))),
            translator: Box::new(
                MockTranslationClient::new()
                    .with_translation("taman", "a park")
                    .with_translation("gadis", "a girl")
                    .with_translation("duduk", "sitting")
                    .with_translation("85mm", "85mm lens"),
            ),
            clipboard: Box::new(MockClipboard::new()),
        });

        session.generate("gadis di taman").await;
        let view = render(&session);

        assert!(view.contains("=== Bahasa Indonesia ==="));
        assert!(view.contains("=== English (Final) ==="));
        assert!(view.contains("=== Hasil Akhir (JSON) ==="));
        assert!(view.contains("Subjek:\ngadis"));
        assert!(view.contains("\"prompt\""));
    }

    #[tokio::test]
    async fn test_render_shows_error_banner() {
        let mut session = empty_session();
        session.generate("").await;
        let view = render(&session);
        assert!(view.starts_with("! Mohon masukkan ide awal untuk prompt."));
    }

    #[tokio::test]
    async fn test_render_shows_copy_label_inside_window() {
        let mut session = Session::with_services(SessionServices {
            generator: Box::new(MockPromptClient::new()),
            translator: Box::new(MockTranslationClient::new()),
            clipboard: Box::new(MockClipboard::new()),
        });

        session.generate("gadis di taman").await;
        session.copy(CopyTarget::NativeAll);

        let view = render(&session);
        assert!(view.contains("=== Bahasa Indonesia [Disalin!] ==="));
    }
}
