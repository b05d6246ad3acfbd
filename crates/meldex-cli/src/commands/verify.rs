use meldex_core::emit::read_artifact;
use meldex_core::error::MeldexError;
use meldex_core::provenance::sha256_hex;
use std::path::Path;

pub fn run(artifact_path: &Path, pdf_file: &Path) -> Result<(), MeldexError> {
    let artifact = read_artifact(artifact_path)?;
    let pdf_bytes = super::read_input(pdf_file)?;
    let provenance = artifact.provenance();

    if !provenance.matches(&pdf_bytes) {
        return Err(MeldexError::StaleArtifact {
            artifact: artifact_path.to_path_buf(),
            expected: provenance.pdf_sha256.clone(),
            actual: sha256_hex(&pdf_bytes),
        });
    }

    println!(
        "{} matches {} (generated {}).",
        artifact_path.display(),
        pdf_file.display(),
        provenance.generated_utc
    );
    Ok(())
}
