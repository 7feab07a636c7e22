//! In-memory fixtures: zip archives and catalog listing pages

use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

enum FixtureEntry {
    File {
        name: String,
        content: Vec<u8>,
        mode: u32,
    },
    Dir {
        name: String,
    },
}

/// Builder for zip archives used as release artifacts
///
/// Entry names are written verbatim, so hostile names such as
/// `../escape.txt` can be produced for extractor tests.
#[derive(Default)]
pub struct ZipFixture {
    entries: Vec<FixtureEntry>,
}

impl ZipFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regular file with mode 0644
    pub fn file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.file_with_mode(name, content, 0o644)
    }

    /// Adds a file with mode 0755
    pub fn executable(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.file_with_mode(name, content, 0o755)
    }

    pub fn file_with_mode(mut self, name: &str, content: impl AsRef<[u8]>, mode: u32) -> Self {
        self.entries.push(FixtureEntry::File {
            name: name.to_string(),
            content: content.as_ref().to_vec(),
            mode,
        });
        self
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.entries.push(FixtureEntry::Dir {
            name: name.to_string(),
        });
        self
    }

    /// Serializes the archive
    ///
    /// # Panics
    ///
    /// Panics if the zip writer rejects an entry.
    pub fn build(self) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

        for entry in self.entries {
            match entry {
                FixtureEntry::File {
                    name,
                    content,
                    mode,
                } => {
                    let options = SimpleFileOptions::default()
                        .compression_method(CompressionMethod::Deflated)
                        .unix_permissions(mode);
                    zip.start_file(name, options).unwrap();
                    zip.write_all(&content).unwrap();
                }
                FixtureEntry::Dir { name } => {
                    let options = SimpleFileOptions::default().unix_permissions(0o755);
                    zip.add_directory(name, options).unwrap();
                }
            }
        }

        zip.finish().unwrap().into_inner()
    }

    /// Serializes the archive to `path`
    pub fn write_to(self, path: &std::path::Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

/// A release archive holding one executable that prints a version banner,
/// the way HashiCorp archives ship a single binary at the root
pub fn release_zip(executable_name: &str, version: &str) -> Vec<u8> {
    let script = format!("#!/bin/sh\necho '{executable_name} v{version}'\n");
    ZipFixture::new()
        .executable(executable_name, script)
        .file("LICENSE.txt", "fixture license\n")
        .build()
}

/// A releases.hashicorp.com style index page for `tool`
///
/// Includes the parent link and the promotional link that the catalog
/// client must skip, followed by one anchor per version in the given order.
pub fn listing_html(tool: &str, versions: &[&str]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>HashiCorp Releases</title></head>\n<body>\n<ul>\n",
    );
    html.push_str("  <li><a href=\"../\">../</a></li>\n");
    for version in versions {
        html.push_str(&format!(
            "  <li><a href=\"/{tool}/{version}/\">{tool}_{version}</a></li>\n"
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(
        "<footer><a href=\"https://fastly.com/?utm_source=hashicorp\">Powered by Fastly</a></footer>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}
