//! Theme archive codecs

use std::fs;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use dskit_theme::{PlatformTokens, PlatformsVariations, Theme, ThemeData, ThemeMeta};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::naming::{member_name, parse_member_name, META_MEMBER};
use crate::ArchiveError;

/// Serialized form of a theme
///
/// Implementations only deal with the storage shape; turning it into a
/// [`Theme`] and back is shared.
pub trait ThemeArchiveCodec {
    fn encode_data(&self, data: &ThemeData) -> Result<Vec<u8>, ArchiveError>;

    fn decode_data(&self, bytes: &[u8]) -> Result<ThemeData, ArchiveError>;

    fn encode(&self, theme: &Theme) -> Result<Vec<u8>, ArchiveError> {
        self.encode_data(&ThemeData::from_theme(theme)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Theme, ArchiveError> {
        Ok(self.decode_data(bytes)?.build()?)
    }

    fn write_file(&self, theme: &Theme, path: &Path) -> Result<(), ArchiveError> {
        let bytes = self.encode(theme)?;
        fs::write(path, &bytes).map_err(|source| ArchiveError::File {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote theme `{}` to {}", theme.name(), path.display());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Theme, ArchiveError> {
        let bytes = fs::read(path).map_err(|source| ArchiveError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode(&bytes)
    }
}

/// Zip container with one JSON member per platform and variation
#[derive(Clone, Copy, Debug)]
pub struct ZipThemeCodec {
    compression: CompressionMethod,
}

impl Default for ZipThemeCodec {
    fn default() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }
}

impl ZipThemeCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store members without compression.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }

    fn write_member<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        name: &str,
        contents: &[u8],
    ) -> Result<(), ArchiveError> {
        let options = SimpleFileOptions::default().compression_method(self.compression);
        zip.start_file(name, options)?;
        zip.write_all(contents)?;
        Ok(())
    }
}

fn parse_member<T: DeserializeOwned>(member: &str, raw: &str) -> Result<T, ArchiveError> {
    serde_json::from_str(raw).map_err(|source| ArchiveError::Json {
        member: member.to_string(),
        source,
    })
}

impl ThemeArchiveCodec for ZipThemeCodec {
    fn encode_data(&self, data: &ThemeData) -> Result<Vec<u8>, ArchiveError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let meta = serde_json::to_vec_pretty(&data.meta).map_err(|source| ArchiveError::Json {
            member: META_MEMBER.to_string(),
            source,
        })?;
        self.write_member(&mut zip, META_MEMBER, &meta)?;

        for (kind, platforms) in &data.variations {
            for (platform, tokens) in platforms {
                let name = member_name(*platform, *kind);
                let contents =
                    serde_json::to_vec_pretty(tokens).map_err(|source| ArchiveError::Json {
                        member: name.clone(),
                        source,
                    })?;
                self.write_member(&mut zip, &name, &contents)?;
            }
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Members named `{platform}_{variation}.json` hold values; any other file
    /// is taken as the meta document. With several candidates the last one
    /// read wins.
    fn decode_data(&self, bytes: &[u8]) -> Result<ThemeData, ArchiveError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut meta: Option<(String, ThemeMeta)> = None;
        let mut variations = PlatformsVariations::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut raw = String::new();
            file.read_to_string(&mut raw)?;

            match parse_member_name(&name) {
                Some((platform, kind)) => {
                    let tokens: PlatformTokens = parse_member(&name, &raw)?;
                    debug!("Read {} {kind} values for {platform} from `{name}`", tokens.len());
                    variations
                        .entry(kind)
                        .or_default()
                        .entry(platform)
                        .or_default()
                        .extend(tokens);
                }
                None => {
                    let parsed: ThemeMeta = parse_member(&name, &raw)?;
                    if let Some((previous, _)) = &meta {
                        warn!("Archive has several meta documents, `{name}` replaces `{previous}`");
                    }
                    meta = Some((name, parsed));
                }
            }
        }

        let (_, meta) = meta.ok_or(ArchiveError::MissingMeta)?;
        Ok(ThemeData { meta, variations })
    }
}
