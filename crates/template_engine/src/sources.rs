//! Fixed workbook layout of the two input files

use sheet_io::Workbook;

use crate::error::Result;
use crate::standards::{MinimumInfo, PackageFields, StandardFields};

/// Sheet holding the registry-required fields (standards workbook)
pub const REGISTRY_SHEET: &str = "QiitaEBI";
/// Sheet holding the minimum-information required fields (standards workbook)
pub const MIMS_SHEET: &str = "MIMS";
/// Free-text readme sheet of the MIxS workbook
pub const README_SHEET: &str = "README";
/// Sheet holding the full minimum-information field list (MIxS workbook)
pub const MIGS_MIMS_SHEET: &str = "MIGS_MIMS";
/// Sheet holding the per-package field reference (MIxS workbook)
pub const ENV_PACKAGES_SHEET: &str = "environmental_packages";

/// All field tables loaded from the two input workbooks
#[derive(Debug, Clone)]
pub struct FieldSources {
    /// Registry-required fields
    pub registry: StandardFields,
    /// Minimum-information required fields
    pub mims: StandardFields,
    /// Full minimum-information field list
    pub migs_mims: MinimumInfo,
    /// Per-package field reference
    pub package_fields: PackageFields,
}

impl FieldSources {
    /// Load and adapt every input table
    ///
    /// Shape problems (missing sheets, missing columns, too few rows)
    /// surface here, before any assembly starts.
    pub fn load(standards: &mut Workbook, mixs: &mut Workbook) -> Result<Self> {
        let registry = StandardFields::from_grid(&standards.grid(REGISTRY_SHEET)?)?;
        let mims = StandardFields::from_grid(&standards.grid(MIMS_SHEET)?)?;

        // The readme sheet is free text; reading it validates the workbook
        // layout but its content is not used.
        let readme = mixs.grid(README_SHEET)?;
        tracing::debug!(rows = readme.height(), "readme sheet loaded");

        let migs_mims = MinimumInfo::from_grid(&mixs.grid(MIGS_MIMS_SHEET)?)?;
        let package_fields = PackageFields::from_grid(&mixs.grid(ENV_PACKAGES_SHEET)?)?;

        Ok(Self {
            registry,
            mims,
            migs_mims,
            package_fields,
        })
    }
}
