//! Console rendering of the `{sender, text}` transcript.

use cad_command_core::{Sender, TranscriptLine};
use chrono::Local;

pub fn print_line(line: &TranscriptLine) {
    print_raw(line.sender, &line.text);
}

pub fn print_user(text: &str) {
    print_raw(Sender::User, text);
}

pub fn print_system(text: &str) {
    print_raw(Sender::System, text);
}

fn print_raw(sender: Sender, text: &str) {
    let stamp = Local::now().format("%H:%M:%S");
    println!("[{stamp}] {}: {text}", sender.as_str());
}
