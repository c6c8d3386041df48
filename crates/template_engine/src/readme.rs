//! Reference (readme) tables describing the fields in use

use sheet_io::OutputTable;

use crate::standards::{
    MinimumInfo, PackageFields, FIELD_NAME_COLUMN, REQUIREMENT_COLUMN, VALUE_SYNTAX_COLUMN,
};

/// `Section` values kept in the minimum-information readme
pub const README_SECTIONS: [&str; 3] = [
    "investigation",
    "environment",
    "migs/mims/mimarks extension",
];

/// The minimum-information readme: rows from the relevant sections, all
/// columns kept
pub fn minimum_info_readme(info: &MinimumInfo) -> OutputTable {
    section_subset(info, &README_SECTIONS)
}

/// Rows whose `Section` value is one of `sections`, original order kept
pub fn section_subset(info: &MinimumInfo, sections: &[&str]) -> OutputTable {
    let mut table = OutputTable::new(info.index_label.clone(), info.columns.clone());
    for (label, cells) in &info.rows {
        if sections.contains(&info.section(cells)) {
            table.push_row(label.clone(), cells.clone());
        }
    }
    table
}

/// The package readme: the filtered package fields indexed by structured
/// field name, package column dropped
pub fn package_readme(fields: &PackageFields) -> OutputTable {
    let mut table = OutputTable::new(
        FIELD_NAME_COLUMN,
        vec![REQUIREMENT_COLUMN.to_string(), VALUE_SYNTAX_COLUMN.to_string()],
    );
    for field in &fields.fields {
        table.push_row(
            field.name.clone(),
            vec![field.requirement.clone(), field.value_syntax.clone()],
        );
    }
    table
}
