//! Per-run mutation context
//!
//! All mutable pipeline state lives here and is passed explicitly — the
//! selector counter, the visited-file set, the exported schemata, and the
//! report counters.  There are no process-wide singletons, so independent
//! runs (or per-file pipelines, if a caller wants to parallelize) never
//! interfere.
//!
//! # Driving a run
//!
//! The external traversal owns the AST; this crate only sees what it is
//! handed:
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use schemata::run::{MutationRun, RunConfig};
//!
//! # fn visit_all(_pass: &mut schemata::run::FilePass<'_>) {}
//! let config = RunConfig::new(
//!     &[PathBuf::from("src/main.c"), PathBuf::from("src/util.c")],
//!     Path::new("src/main.c"),
//! ).unwrap();
//! let mut run = MutationRun::new(config);
//!
//! let mut pass = run.begin_file(Path::new("src/main.c")).unwrap();
//! visit_all(&mut pass); // pass.visit(&node, &Permissive) per binary expression
//! pass.finish();
//!
//! let finished = run.promote();
//! eprintln!("Mutations found: {}", finished.report.mutants);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::rewrite::engine::{self, FileRole, PromotionReport};
use crate::rewrite::plan::RewritePlan;
use crate::schema::meta::{self, MetaMutant};
use crate::schema::store::MutantStore;
use crate::schema::synthesize;
use crate::source::anchor::FileId;
use crate::source::expr::{ExprNode, SpanStatus};
use crate::source::oracle::TypeOracle;

/// Configuration errors raised before any mutation work starts
#[derive(Debug)]
pub enum ConfigError {
    /// A source path could not be canonicalized
    Canonicalize { path: PathBuf, source: io::Error },

    /// The designated entry file is not in the source list
    EntryNotInSources { path: PathBuf },

    /// A file pass was requested for a file outside the source list
    FileNotInSources { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Canonicalize { path, source } => {
                write!(f, "Cannot resolve '{}': {}", path.display(), source)
            }
            ConfigError::EntryNotInSources { path } => {
                write!(
                    f,
                    "Entry file '{}' is not in the source list",
                    path.display()
                )
            }
            ConfigError::FileNotInSources { path } => {
                write!(f, "File '{}' is not in the source list", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The file set to mutate plus the entry-file designation.
///
/// Paths are canonicalized at construction so every later comparison and
/// dedup key uses the stable identity.
#[derive(Debug, Clone)]
pub struct RunConfig {
    sources: Vec<FileId>,
    entry: FileId,
}

impl RunConfig {
    pub fn new(sources: &[PathBuf], entry: &Path) -> Result<Self, ConfigError> {
        let mut ids = Vec::with_capacity(sources.len());
        for path in sources {
            let id = FileId::new(path).map_err(|source| ConfigError::Canonicalize {
                path: path.clone(),
                source,
            })?;
            ids.push(id);
        }
        let entry_id = FileId::new(entry).map_err(|source| ConfigError::Canonicalize {
            path: entry.to_path_buf(),
            source,
        })?;
        if !ids.contains(&entry_id) {
            return Err(ConfigError::EntryNotInSources {
                path: entry.to_path_buf(),
            });
        }
        Ok(RunConfig {
            sources: ids,
            entry: entry_id,
        })
    }

    pub fn sources(&self) -> &[FileId] {
        &self.sources
    }

    pub fn entry(&self) -> &FileId {
        &self.entry
    }
}

/// Counters describing what a run did; none of these are fatal conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Mutants accepted into the batch
    pub mutants: usize,
    /// Candidates merged as duplicates of an existing record
    pub duplicates: usize,
    /// Operator replacements the oracle ruled out
    pub oracle_rejections: usize,
    /// Expressions skipped because their macro origin did not resolve
    pub unresolved_skips: usize,
    /// Hash-collision consistency faults (first record won)
    pub hash_collisions: usize,
    /// Files whose staging failed and were skipped
    pub stage_failures: usize,
    /// Entry-file fixup I/O failure; the mutated entry will not compile
    pub fixup_failed: bool,
    /// Staged files that could not be renamed over their original
    pub promotion_failures: usize,
}

/// Everything a finished run hands to the orchestrator
#[derive(Debug)]
pub struct FinishedRun {
    /// Selector index → anchor span → replacement text, per mutated group
    pub schemata: Vec<MetaMutant>,
    pub promotion: PromotionReport,
    pub report: RunReport,
}

/// One mutation run over a batch of files.
///
/// Owns the selector counter (globally unique indices across the whole
/// batch — a single `SELECTOR` value activates at most one mutant anywhere)
/// and the visited-file set that keeps re-entrant analysis of shared
/// headers from staging a file twice.
#[derive(Debug)]
pub struct MutationRun {
    config: RunConfig,
    next_index: u32,
    visited: FxHashSet<FileId>,
    staged: Vec<(FileId, PathBuf)>,
    schemata: Vec<MetaMutant>,
    report: RunReport,
}

impl MutationRun {
    pub fn new(config: RunConfig) -> Self {
        MutationRun {
            config,
            next_index: 1,
            visited: FxHashSet::default(),
            staged: Vec::new(),
            schemata: Vec::new(),
            report: RunReport::default(),
        }
    }

    /// Start the pass for one source file, with a fresh mutant store.
    ///
    /// The traversal then calls [`FilePass::visit`] once per binary
    /// expression and [`FilePass::finish`] at end of file.
    pub fn begin_file(&mut self, file: &Path) -> Result<FilePass<'_>, ConfigError> {
        let id = FileId::new(file).map_err(|source| ConfigError::Canonicalize {
            path: file.to_path_buf(),
            source,
        })?;
        if !self.config.sources.contains(&id) {
            return Err(ConfigError::FileNotInSources {
                path: file.to_path_buf(),
            });
        }
        Ok(FilePass {
            run: self,
            file: id,
            store: MutantStore::new(),
        })
    }

    /// Meta-mutants accepted so far, in batch order
    pub fn schemata(&self) -> &[MetaMutant] {
        &self.schemata
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Staged files awaiting promotion
    pub fn staged(&self) -> &[(FileId, PathBuf)] {
        &self.staged
    }

    /// Next selector index to be assigned
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Fix up the staged entry file, then rename every staged file over its
    /// original.  Consumes the run; per-file failures are reported, never
    /// fatal.
    pub fn promote(mut self) -> FinishedRun {
        let entry = self.config.entry.clone();
        if let Some((_, staged)) = self.staged.iter().find(|(file, _)| *file == entry) {
            if let Err(err) = engine::fixup_entry(staged) {
                eprintln!("Warning: selector fixup failed for '{}': {}", entry, err);
                self.report.fixup_failed = true;
            }
        }

        let promotion = engine::promote(&self.staged);
        self.report.promotion_failures = promotion.failed.len();

        FinishedRun {
            schemata: self.schemata,
            promotion,
            report: self.report,
        }
    }

    fn eligible(&self, file: &FileId) -> bool {
        self.config.sources.contains(file) && !self.visited.contains(file)
    }
}

/// The in-flight pass over one source file's expressions
#[derive(Debug)]
pub struct FilePass<'r> {
    run: &'r mut MutationRun,
    file: FileId,
    store: MutantStore,
}

impl FilePass<'_> {
    /// The file this pass was opened for
    pub fn file(&self) -> &FileId {
        &self.file
    }

    /// Feed one visited expression; returns how many mutants it added.
    ///
    /// Applies the eligibility filter: system-header locations are ignored,
    /// unresolvable macro origins are skipped and counted, and anchors in
    /// files outside the run's source list (or already staged) contribute
    /// nothing.  A skipped expression never aborts the file or the run.
    pub fn visit(&mut self, node: &ExprNode, oracle: &dyn TypeOracle) -> usize {
        let ExprNode::Binary(expr) = node;
        match &expr.span {
            SpanStatus::SystemHeader => 0,
            SpanStatus::MacroUnresolved => {
                self.run.report.unresolved_skips += 1;
                0
            }
            SpanStatus::Resolved { start, end } => {
                if !self.run.eligible(&start.file) {
                    return 0;
                }
                let outcome = synthesize::synthesize(expr, start, end, oracle, &mut self.store);
                self.run.report.mutants += outcome.accepted;
                self.run.report.duplicates += outcome.duplicates;
                self.run.report.oracle_rejections += outcome.rejected;
                self.run.report.hash_collisions += outcome.collisions;
                outcome.accepted
            }
        }
    }

    /// Assemble this pass's mutants into meta-mutants and stage every file
    /// they touch.  Returns the staged paths.
    ///
    /// The pass's primary file is always staged, even with zero mutants, so
    /// it still receives its selector-declaration line.  A traversal may
    /// also resolve anchors into user headers of the same translation unit;
    /// each such file is staged once, guarded by the run's visited set.
    /// Staging failures are warned about and counted, and do not abort the
    /// remaining files.
    pub fn finish(self) -> Vec<PathBuf> {
        let run = self.run;
        let metas = meta::assemble(&self.store, &mut run.next_index);

        let mut plans: BTreeMap<FileId, RewritePlan> = BTreeMap::new();
        plans.insert(self.file.clone(), RewritePlan::new(self.file.clone()));
        for m in &metas {
            plans
                .entry(m.start.file.clone())
                .or_insert_with(|| RewritePlan::new(m.start.file.clone()))
                .push_meta(m);
        }
        run.schemata.extend(metas);

        let mut staged_paths = Vec::new();
        for (file, plan) in plans {
            if !run.visited.insert(file.clone()) {
                continue;
            }
            let role = if file == run.config.entry {
                FileRole::Entry
            } else {
                FileRole::Other
            };
            match engine::stage(&file, &plan, role) {
                Ok(path) => {
                    eprintln!("Staged mutated file: {}", file);
                    run.staged.push((file, path.clone()));
                    staged_paths.push(path);
                }
                Err(err) => {
                    eprintln!("Warning: staging failed for '{}': {}", file, err);
                    run.report.stage_failures += 1;
                }
            }
        }

        staged_paths
    }
}
