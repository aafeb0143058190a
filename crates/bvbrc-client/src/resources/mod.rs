//! Known data API collections ("cores") and the per-core query surface

pub mod lookup;
pub mod resource;

pub use resource::Resource;

use crate::error::ClientError;
use std::fmt;
use std::str::FromStr;

macro_rules! cores {
    ($($variant:ident => ($name:literal, $key:literal)),+ $(,)?) => {
        /// A queryable collection on the data API
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Core {
            $($variant),+
        }

        impl Core {
            /// Every known core
            pub const ALL: &'static [Core] = &[$(Core::$variant),+];

            /// Path segment used in the query URL
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Core::$variant => $name),+
                }
            }

            /// Field that uniquely identifies a record
            pub fn primary_key(self) -> &'static str {
                match self {
                    $(Core::$variant => $key),+
                }
            }
        }
    };
}

cores! {
    Antibiotics => ("antibiotics", "pubchem_cid"),
    Bioset => ("bioset", "bioset_id"),
    BiosetResult => ("bioset_result", "id"),
    EnzymeClassRef => ("enzyme_class_ref", "ec_number"),
    Epitope => ("epitope", "epitope_id"),
    EpitopeAssay => ("epitope_assay", "assay_id"),
    Experiment => ("experiment", "exp_id"),
    FeatureSequence => ("feature_sequence", "md5"),
    GeneOntologyRef => ("gene_ontology_ref", "go_id"),
    Genome => ("genome", "genome_id"),
    GenomeAmr => ("genome_amr", "id"),
    GenomeFeature => ("genome_feature", "feature_id"),
    GenomeSequence => ("genome_sequence", "sequence_id"),
    IdRef => ("id_ref", "id"),
    MiscNiaidSgc => ("misc_niaid_sgc", "target_id"),
    Pathway => ("pathway", "id"),
    PathwayRef => ("pathway_ref", "id"),
    Ppi => ("ppi", "id"),
    ProteinFamilyRef => ("protein_family_ref", "family_id"),
    ProteinFeature => ("protein_feature", "id"),
    ProteinStructure => ("protein_structure", "pdb_id"),
    SequenceFeature => ("sequence_feature", "id"),
    SequenceFeatureVt => ("sequence_feature_vt", "id"),
    Serology => ("serology", "id"),
    SpGene => ("sp_gene", "id"),
    SpGeneRef => ("sp_gene_ref", "id"),
    SpikeLineage => ("spike_lineage", "id"),
    SpikeVariant => ("spike_variant", "id"),
    Strain => ("strain", "id"),
    StructuredAssertion => ("structured_assertion", "id"),
    Subsystem => ("subsystem", "id"),
    SubsystemRef => ("subsystem_ref", "subsystem_id"),
    Surveillance => ("surveillance", "id"),
    Taxonomy => ("taxonomy", "taxon_id"),
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Core {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Core::ALL
            .iter()
            .copied()
            .find(|core| core.as_str() == s)
            .ok_or_else(|| ClientError::config(format!("Unknown core '{}'", s)))
    }
}
