//! Integration tests for the template pipeline
//!
//! These tests run the whole in-memory flow: raw grids through the typed
//! adapters, into the engine, out as CSV text.

#[cfg(test)]
mod integration_tests {
    use sheet_io::Grid;

    use crate::{
        minimum_info_readme, package_readme, package_readme_filename, template_filename,
        MinimumInfo, PackageFields, SampleBatch, StandardFields, TemplateEngine,
        TemplateOptions, MIMS_README_FILENAME,
    };

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn standards_grids() -> (Grid, Grid) {
        let registry = Grid::new(
            "QiitaEBI",
            vec![
                row(&["sample_name", "investigation_type", "env_package"]),
                row(&["required", "required", "required"]),
                row(&["free text", "metagenome", "soil"]),
            ],
        );
        let mims = Grid::new(
            "MIMS",
            vec![
                row(&["lat_lon", "collection_date"]),
                row(&["required", "required"]),
                row(&["{float} {float}", "{timestamp}"]),
            ],
        );
        (registry, mims)
    }

    fn mixs_grids() -> (Grid, Grid) {
        let migs_mims = Grid::new(
            "MIGS_MIMS",
            vec![
                row(&["Item", "Section", "Definition"]),
                row(&["project_name", "investigation", "name of the project"]),
                row(&["lat_lon", "environment", "geographic location"]),
                row(&["seq_meth", "sequencing", "sequencing method"]),
            ],
        );
        let packages = Grid::new(
            "environmental_packages",
            vec![
                row(&[
                    "Environmental package",
                    "Structured comment name",
                    "Requirement",
                    "Value syntax",
                ]),
                row(&["soil", "cur_land_use", "optional", "{text}"]),
                row(&["water", "depth", "required", "{float} m"]),
                row(&["soil", "ph", "optional", "{float}"]),
            ],
        );
        (migs_mims, packages)
    }

    #[test]
    fn test_full_pipeline_for_one_package() {
        let (registry_grid, mims_grid) = standards_grids();
        let (migs_mims_grid, packages_grid) = mixs_grids();

        let registry = StandardFields::from_grid(&registry_grid).unwrap();
        let mims = StandardFields::from_grid(&mims_grid).unwrap();
        let migs_mims = MinimumInfo::from_grid(&migs_mims_grid).unwrap();
        let package_fields = PackageFields::from_grid(&packages_grid).unwrap();

        let batch = SampleBatch::new(vec!["soil".to_string()], 2, "Metcalf40");
        let engine = TemplateEngine::new(
            registry,
            mims,
            package_fields,
            TemplateOptions::default(),
        );

        let template = engine.assemble(&batch).unwrap();
        assert_eq!(
            template.to_csv_string().unwrap(),
            "index,sample_name,investigation_type,env_package,lat_lon,collection_date,cur_land_use,ph\n\
             Requirement,required,required,required,required,required,optional,optional\n\
             Format,free text,metagenome,soil,{float} {float},{timestamp},{text},{float}\n\
             1,Metcalf40.soil.1,metagenome,soil,,,,\n\
             2,Metcalf40.soil.2,metagenome,soil,,,,\n"
        );

        let info_readme = minimum_info_readme(&migs_mims);
        assert_eq!(
            info_readme.to_csv_string().unwrap(),
            "Item,Section,Definition\n\
             project_name,investigation,name of the project\n\
             lat_lon,environment,geographic location\n"
        );

        let selected = engine.package_fields().select(&batch.packages);
        let pkg_readme = package_readme(&selected);
        assert_eq!(
            pkg_readme.to_csv_string().unwrap(),
            "Structured comment name,Requirement,Value syntax\n\
             cur_land_use,optional,{text}\n\
             ph,optional,{float}\n"
        );

        assert_eq!(
            template_filename(&batch.prefix, &batch.packages, batch.samples),
            "Metcalf40_soil_2_samples.csv"
        );
        assert_eq!(
            package_readme_filename(&batch.packages),
            "README_soil_metadata.csv"
        );
        assert_eq!(MIMS_README_FILENAME, "README_MIMS_metadata.csv");
    }

    #[test]
    fn test_full_pipeline_two_packages_no_samples() {
        let (registry_grid, mims_grid) = standards_grids();
        let (_, packages_grid) = mixs_grids();

        let engine = TemplateEngine::new(
            StandardFields::from_grid(&registry_grid).unwrap(),
            StandardFields::from_grid(&mims_grid).unwrap(),
            PackageFields::from_grid(&packages_grid).unwrap(),
            TemplateOptions::default(),
        );

        let batch = SampleBatch::new(
            vec!["soil".to_string(), "water".to_string()],
            0,
            "Study1",
        );
        let template = engine.assemble(&batch).unwrap();

        // Both packages contribute columns, sheet order preserved
        assert_eq!(
            template.columns,
            vec![
                "sample_name",
                "investigation_type",
                "env_package",
                "lat_lon",
                "collection_date",
                "cur_land_use",
                "depth",
                "ph"
            ]
        );
        assert_eq!(template.row_count(), 2);

        assert_eq!(
            template_filename(&batch.prefix, &batch.packages, batch.samples),
            "Study1_soil_water_0_samples.csv"
        );
    }
}
