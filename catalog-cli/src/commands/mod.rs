//! Subcommand implementations.

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod render;
pub mod search;
pub mod sort;
pub mod update;

use anyhow::{Context, Result};
use catalog_types::Edition;

/// Edition toggle shared by `add` and `update`.
///
/// At most one of `--ebook`, `--printed`, `--base` may be given; the
/// variant-specific value flags belong to their toggle.
#[derive(clap::Args, Debug)]
pub struct EditionFlags {
    /// Collect e-book fields (download size, format)
    #[arg(long, conflicts_with_all = ["printed", "base"])]
    pub ebook: bool,

    /// Download size in megabytes
    #[arg(long, requires = "ebook")]
    pub file_size: Option<f64>,

    /// Container format (epub, pdf, ...)
    #[arg(long, requires = "ebook")]
    pub format: Option<String>,

    /// Collect printed-book fields (pages, cover)
    #[arg(long, conflicts_with_all = ["ebook", "base"])]
    pub printed: bool,

    /// Page count
    #[arg(long, requires = "printed")]
    pub pages: Option<u32>,

    /// Cover binding (hardcover, paperback, ...)
    #[arg(long, requires = "printed")]
    pub cover: Option<String>,

    /// Drop variant-specific fields
    #[arg(long, conflicts_with_all = ["ebook", "printed"])]
    pub base: bool,
}

impl EditionFlags {
    /// The edition these flags describe, or `None` when no toggle was
    /// given (callers keep whatever edition they already have).
    pub fn to_edition(&self) -> Result<Option<Edition>> {
        if self.ebook {
            let file_size_mb = self.file_size.context("--ebook requires --file-size")?;
            let format = self.format.clone().context("--ebook requires --format")?;
            Ok(Some(Edition::EBook {
                file_size_mb,
                format,
            }))
        } else if self.printed {
            let pages = self.pages.context("--printed requires --pages")?;
            let cover = self.cover.clone().context("--printed requires --cover")?;
            Ok(Some(Edition::Printed { pages, cover }))
        } else if self.base {
            Ok(Some(Edition::Base))
        } else {
            Ok(None)
        }
    }
}
