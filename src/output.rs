//! Writing generated assembly to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pcl_ast::Program;
use pcl_codegen::{CodeGenerator, CodegenOptions, Generated};
use pcl_core::CodegenError;

/// Process exit status when the assembly file cannot be created.
pub const OUTPUT_UNAVAILABLE_STATUS: i32 = -99;

/// Generate the assembly for `program` in memory.
pub fn compile(program: &Program<'_>, options: &CodegenOptions) -> Result<Generated, CodegenError> {
    CodeGenerator::new(options.clone()).generate(program)
}

/// Generate the assembly for `program` and write it to `dir`.
///
/// The file is named `<program>.<extension>`. Returns its path. Failure to
/// create the file is [`CodegenError::OutputUnavailable`].
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn write_unit(
    program: &Program<'_>,
    options: &CodegenOptions,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, CodegenError> {
    let generated = compile(program, options)?;
    let path = dir.as_ref().join(&generated.file_name);
    write_generated(&generated, &path)?;
    Ok(path)
}

/// Like [`write_unit`], but an assembly file that cannot be created ends
/// the process with [`OUTPUT_UNAVAILABLE_STATUS`].
///
/// Other errors are returned.
///
/// The `Cannot open assembly file` message is reported with `log::error!`
/// just before exiting. This crate never installs a logger, so callers that
/// want to see it must install one first (for example `env_logger`);
/// without a logger the process exits silently.
///
/// ```
/// use bumpalo::Bump;
/// use pcl::ast::AstBuilder;
/// use pcl::CodegenOptions;
///
/// let _ = env_logger::builder().is_test(true).try_init();
///
/// let dir = tempdir::TempDir::new("pcl-doc").unwrap();
/// let arena = Bump::new();
/// let b = AstBuilder::new(&arena);
/// let program = b.program("Logged", [], []);
/// let options = CodegenOptions::default();
///
/// let path = pcl::write_unit_or_exit(&program, &options, dir.path()).unwrap();
/// assert!(path.ends_with("Logged.j"));
/// ```
pub fn write_unit_or_exit(
    program: &Program<'_>,
    options: &CodegenOptions,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, CodegenError> {
    match write_unit(program, options, dir) {
        Err(err) if err.is_fatal() => {
            log::error!("Cannot open assembly file: {err}");
            std::process::exit(OUTPUT_UNAVAILABLE_STATUS)
        }
        result => result,
    }
}

/// Create `path` and write the whole listing. The file is closed on return.
fn write_generated(generated: &Generated, path: &Path) -> Result<(), CodegenError> {
    let file = File::create(path).map_err(|source| CodegenError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(generated.text.as_bytes())?;
    writer.flush()?;

    log::info!(
        "wrote {} ({} lines, {} warning(s))",
        path.display(),
        generated.listing.len(),
        generated.warnings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use pcl_ast::AstBuilder;
    use pcl_core::TypeTag;
    use tempdir::TempDir;
    use test_log::test;

    #[test]
    fn writes_named_file() {
        let dir = TempDir::new("pcl-output").unwrap();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program(
            "Written",
            [b.decl("x", TypeTag::Integer)],
            [b.assign("x", TypeTag::Integer, b.int("1"))],
        );

        let options = CodegenOptions::default();
        let path = write_unit(&program, &options, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Written.j"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, compile(&program, &options).unwrap().text);
    }

    #[test]
    fn missing_directory_is_output_unavailable() {
        let dir = TempDir::new("pcl-output").unwrap();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program("Lost", [], []);

        let missing = dir.path().join("missing");
        let options = CodegenOptions::default();
        let err = write_unit(&program, &options, &missing).unwrap_err();

        match err {
            CodegenError::OutputUnavailable { path, .. } => {
                assert_eq!(path, missing.join("Lost.j"));
            }
            other => panic!("expected OutputUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn malformed_tree_is_returned_not_fatal() {
        let dir = TempDir::new("pcl-output").unwrap();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program("Bad", [], [b.if_then(b.int("1"), [])]);

        let options = CodegenOptions::default();
        let err = write_unit_or_exit(&program, &options, dir.path())
            .unwrap_err();
        assert!(matches!(err, CodegenError::NonRelationalCondition { .. }));
        assert!(!dir.path().join("Bad.j").exists());
    }
}
