//! Delivery of the rendered summary.
//!
//! Messages are written as MIME `multipart/alternative` documents carrying
//! both the HTML and the plain-text rendering, either to a writer (stdout)
//! or as `.eml` files in an outbox directory.

use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const BOUNDARY: &str = "account-summary-alternative";

/// A message ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl Message {
    /// Writes the message in MIME format.
    pub fn write_mime<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "From: {}\r\n", self.from)?;
        write!(out, "To: {}\r\n", self.to)?;
        write!(out, "Subject: {}\r\n", self.subject)?;
        write!(out, "MIME-Version: 1.0\r\n")?;
        write!(
            out,
            "Content-Type: multipart/alternative; boundary=\"{}\"\r\n\r\n",
            BOUNDARY
        )?;

        let parts = [("text/plain", &self.text_body), ("text/html", &self.html_body)];
        for (content_type, body) in parts {
            write!(out, "--{}\r\n", BOUNDARY)?;
            write!(out, "Content-Type: {}; charset=UTF-8\r\n\r\n", content_type)?;
            write!(out, "{}\r\n", body)?;
        }

        write!(out, "--{}--\r\n", BOUNDARY)?;
        out.flush()?;
        Ok(())
    }
}

/// Destination for summary messages.
pub trait Notifier {
    /// Delivers a message. `source` names the batch it summarizes.
    fn send(&mut self, source: &str, message: &Message) -> Result<()>;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn send(&mut self, source: &str, message: &Message) -> Result<()> {
        (**self).send(source, message)
    }
}

/// Writes every message to the wrapped writer.
pub struct WriterNotifier<W: Write> {
    writer: W,
}

impl<W: Write> WriterNotifier<W> {
    pub fn new(writer: W) -> Self {
        WriterNotifier { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for WriterNotifier<W> {
    fn send(&mut self, source: &str, message: &Message) -> Result<()> {
        message.write_mime(&mut self.writer)?;
        info!("Summary of {} sent to {}", source, message.to);
        Ok(())
    }
}

/// Drops each message into a directory as `<source>.eml`.
///
/// A repeated source overwrites the earlier file.
pub struct OutboxNotifier {
    dir: PathBuf,
}

impl OutboxNotifier {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        OutboxNotifier { dir: dir.into() }
    }

    /// Path the message for `source` is written to.
    pub fn path_for(&self, source: &str) -> PathBuf {
        self.dir.join(format!("{}.eml", source))
    }
}

impl Notifier for OutboxNotifier {
    fn send(&mut self, source: &str, message: &Message) -> Result<()> {
        let path = self.path_for(source);
        let file = File::create(&path)?;
        message.write_mime(BufWriter::new(file))?;
        info!("Summary of {} written to {}", source, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> Message {
        Message {
            from: "Account Summary <no-reply@localhost>".to_string(),
            to: "holder@example.com".to_string(),
            subject: "Transaction Summary".to_string(),
            html_body: "<p>Total balance is 1.00</p>".to_string(),
            text_body: "Total balance is 1.00".to_string(),
        }
    }

    #[test]
    fn test_writer_notifier_writes_mime() {
        let mut notifier = WriterNotifier::new(Vec::new());
        notifier.send("account_1234", &message()).unwrap();

        let output = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(output.starts_with("From: Account Summary <no-reply@localhost>\r\n"));
        assert!(output.contains("To: holder@example.com\r\n"));
        assert!(output.contains("Subject: Transaction Summary\r\n"));
        assert!(output
            .contains("Content-Type: text/plain; charset=UTF-8\r\n\r\nTotal balance is 1.00"));
        assert!(output.contains(
            "Content-Type: text/html; charset=UTF-8\r\n\r\n<p>Total balance is 1.00</p>"
        ));
        assert!(output.ends_with("--account-summary-alternative--\r\n"));
    }

    #[test]
    fn test_outbox_notifier_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut notifier = OutboxNotifier::new(dir.path());
        notifier.send("account_1234", &message()).unwrap();

        let path = dir.path().join("account_1234.eml");
        assert_eq!(notifier.path_for("account_1234"), path);
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("Subject: Transaction Summary"));
    }
}
