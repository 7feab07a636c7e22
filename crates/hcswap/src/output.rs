use std::io::{self, Write};

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Download progress on a single rewritten line
pub fn progress_callback(downloaded: u64, total: u64) {
    if total > 0 {
        let percent = (downloaded as f64 / total as f64 * 100.0) as u8;
        let mb_downloaded = downloaded as f64 / 1_048_576.0;
        let mb_total = total as f64 / 1_048_576.0;
        print!(
            "\r  Progress: {:.1} / {:.1} MB ({}%)",
            mb_downloaded, mb_total, percent
        );
        io::stdout().flush().ok();

        if downloaded == total {
            println!();
        }
    }
}
