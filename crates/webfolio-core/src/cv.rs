//! "Download CV" with a placeholder fallback.
//!
//! The page links to a CV document under the assets root. If that file is
//! missing the download still succeeds: a plain-text placeholder CV is
//! generated from the owner profile and saved instead.

use std::path::{Path, PathBuf};

use crate::config::OwnerProfile;
use crate::error::{CoreError, CoreResult};

/// Shown after a placeholder was saved
pub fn placeholder_notice(asset_path: &str) -> String {
    format!("Placeholder CV downloaded! Please replace {asset_path} with your actual CV file.")
}

/// Checks whether a static asset can be served
pub trait AssetProbe {
    /// Resolve `asset` to a readable location, or `ResourceUnavailable`
    fn probe(&self, asset: &str) -> CoreResult<PathBuf>;
}

/// Probes assets on the local filesystem under `root`
#[derive(Clone, Debug)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProbe for FsProbe {
    fn probe(&self, asset: &str) -> CoreResult<PathBuf> {
        let path = self.root.join(asset);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(CoreError::ResourceUnavailable(format!(
                "{} is not a file",
                path.display()
            ))),
            Err(e) => Err(CoreError::ResourceUnavailable(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// A locally generated substitute document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl PlaceholderDocument {
    /// Build the placeholder CV for `owner`.
    ///
    /// The file name is the owner's name with whitespace removed plus
    /// `_CV.txt`, so the default profile yields `YourName_CV.txt`.
    pub fn for_owner(owner: &OwnerProfile, asset_path: &str) -> Self {
        let compact: String = owner.name.split_whitespace().collect();
        Self {
            file_name: format!("{compact}_CV.txt"),
            mime_type: "text/plain",
            contents: placeholder_contents(owner, asset_path),
        }
    }
}

fn placeholder_contents(owner: &OwnerProfile, asset_path: &str) -> String {
    format!(
        "{name} - {headline} CV

CONTACT INFORMATION
Email: {email}
Phone: {phone}
Location: {location}
Portfolio: {website}

PROFESSIONAL SUMMARY
Passionate web developer with expertise in creating user-friendly, responsive websites and applications.
Strong foundation in both front-end and back-end development with a holistic approach to projects.

SKILLS
• Front-End: HTML5, CSS3, JavaScript, React
• Back-End: Node.js, Express.js, MongoDB
• Tools: Git, Figma, VS Code
• Design: Responsive Design, UI/UX

EXPERIENCE
Senior Web Developer | Tech Solutions Inc. | 2023 - Present
• Lead developer for client projects
• Managed team of junior developers
• Implemented best practices for code quality

Front-End Developer | Digital Innovations | 2021 - 2023
• Developed responsive user interfaces using React
• Improved loading speeds by 40%
• Collaborated with designers for pixel-perfect websites

EDUCATION
Master's in Computer Science | University of Technology | 2017 - 2019
Bachelor's in Information Technology | State University | 2013 - 2017

---
This is a placeholder CV. Please replace {asset_path} with your actual CV file.
",
        name = owner.name,
        headline = owner.headline,
        email = owner.email,
        phone = owner.phone,
        location = owner.location,
        website = owner.website,
        asset_path = asset_path,
    )
}

/// What a download produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CvOutcome {
    /// The real asset was copied to this path
    Asset(PathBuf),
    /// The asset was unavailable; a placeholder was written to this path
    Placeholder(PathBuf),
}

impl CvOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CvOutcome::Asset(path) | CvOutcome::Placeholder(path) => path,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CvOutcome::Placeholder(_))
    }
}

/// Saves the CV, real or placeholder, into a downloads directory
pub struct CvDownloader<P: AssetProbe> {
    probe: P,
    asset_path: String,
    downloads_dir: PathBuf,
}

impl<P: AssetProbe> CvDownloader<P> {
    pub fn new(probe: P, asset_path: impl Into<String>, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            probe,
            asset_path: asset_path.into(),
            downloads_dir: downloads_dir.into(),
        }
    }

    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// Copy the asset if it can be reached, otherwise write the placeholder.
    ///
    /// Only a failure to write into the downloads directory is an error.
    pub fn download(&self, owner: &OwnerProfile) -> CoreResult<CvOutcome> {
        std::fs::create_dir_all(&self.downloads_dir)?;

        match self.probe.probe(&self.asset_path) {
            Ok(source) => {
                let file_name = source
                    .file_name()
                    .map(|n| n.to_os_string())
                    .unwrap_or_else(|| "cv.pdf".into());
                let target = self.downloads_dir.join(file_name);
                if is_same_file(&source, &target) {
                    tracing::info!(target = %target.display(), "CV already in downloads directory");
                    return Ok(CvOutcome::Asset(target));
                }
                std::fs::copy(&source, &target)?;
                tracing::info!(target = %target.display(), "CV downloaded");
                Ok(CvOutcome::Asset(target))
            }
            Err(e) => {
                tracing::warn!(error = %e, "CV asset unavailable, generating placeholder");
                let doc = PlaceholderDocument::for_owner(owner, &self.asset_path);
                let target = self.downloads_dir.join(&doc.file_name);
                std::fs::write(&target, doc.contents.as_bytes())?;
                Ok(CvOutcome::Placeholder(target))
            }
        }
    }
}

/// Both paths name the same existing file. Copying a file onto itself
/// truncates it.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
