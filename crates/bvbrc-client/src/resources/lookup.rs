//! Friendly lookup names per core
//!
//! Maps names such as `species` or `locus_tag` to the field they filter on.
//! `id` always resolves to the core's primary key.

use super::Core;

/// (core, lookup name, field)
const FIELD_ALIASES: &[(Core, &str, &str)] = &[
    // genome
    (Core::Genome, "species", "species"),
    (Core::Genome, "genus", "genus"),
    (Core::Genome, "taxon_id", "taxon_id"),
    (Core::Genome, "name", "genome_name"),
    (Core::Genome, "strain", "strain"),
    (Core::Genome, "host", "host_name"),
    (Core::Genome, "country", "isolation_country"),
    (Core::Genome, "status", "genome_status"),
    (Core::Genome, "assembly_accession", "assembly_accession"),
    (Core::Genome, "bioproject", "bioproject_accession"),
    (Core::Genome, "biosample", "biosample_accession"),
    // genome_feature
    (Core::GenomeFeature, "genome_id", "genome_id"),
    (Core::GenomeFeature, "gene", "gene"),
    (Core::GenomeFeature, "product", "product"),
    (Core::GenomeFeature, "feature_type", "feature_type"),
    (Core::GenomeFeature, "accession", "accession"),
    (Core::GenomeFeature, "strand", "strand"),
    (Core::GenomeFeature, "patric_id", "patric_id"),
    (Core::GenomeFeature, "locus_tag", "refseq_locus_tag"),
    (Core::GenomeFeature, "plfam", "plfam_id"),
    (Core::GenomeFeature, "pgfam", "pgfam_id"),
    (Core::GenomeFeature, "annotation", "annotation"),
    // genome_amr
    (Core::GenomeAmr, "genome_id", "genome_id"),
    (Core::GenomeAmr, "antibiotic", "antibiotic"),
    (Core::GenomeAmr, "phenotype", "resistant_phenotype"),
    (Core::GenomeAmr, "method", "laboratory_typing_method"),
    // genome_sequence
    (Core::GenomeSequence, "genome_id", "genome_id"),
    (Core::GenomeSequence, "accession", "accession"),
    // taxonomy
    (Core::Taxonomy, "name", "taxon_name"),
    (Core::Taxonomy, "rank", "taxon_rank"),
    (Core::Taxonomy, "parent", "parent_id"),
    (Core::Taxonomy, "lineage", "lineage_ids"),
    // antibiotics
    (Core::Antibiotics, "name", "antibiotic_name"),
    (Core::Antibiotics, "cas_id", "cas_id"),
    // sp_gene
    (Core::SpGene, "genome_id", "genome_id"),
    (Core::SpGene, "gene", "gene"),
    (Core::SpGene, "property", "property"),
    (Core::SpGene, "source", "source"),
    // pathway
    (Core::Pathway, "genome_id", "genome_id"),
    (Core::Pathway, "pathway_id", "pathway_id"),
    (Core::Pathway, "ec_number", "ec_number"),
    // subsystem
    (Core::Subsystem, "genome_id", "genome_id"),
    (Core::Subsystem, "name", "subsystem_name"),
    (Core::Subsystem, "superclass", "superclass"),
    // protein_family_ref
    (Core::ProteinFamilyRef, "family_type", "family_type"),
    // epitope
    (Core::Epitope, "protein", "protein_name"),
    (Core::Epitope, "organism", "organism"),
    // strain
    (Core::Strain, "taxon_id", "taxon_id"),
    (Core::Strain, "strain", "strain"),
    // surveillance
    (Core::Surveillance, "host", "host_species"),
    (Core::Surveillance, "country", "collection_country"),
];

/// Resolve a lookup name for `core` to a field name.
pub fn resolve_field(core: Core, name: &str) -> Option<&'static str> {
    if name == "id" {
        return Some(core.primary_key());
    }
    FIELD_ALIASES
        .iter()
        .find(|(c, alias, _)| *c == core && *alias == name)
        .map(|(_, _, field)| *field)
}

/// Lookup names available on `core`, `id` first.
pub fn lookup_names(core: Core) -> Vec<&'static str> {
    std::iter::once("id")
        .chain(
            FIELD_ALIASES
                .iter()
                .filter(|(c, _, _)| *c == core)
                .map(|(_, alias, _)| *alias),
        )
        .collect()
}
