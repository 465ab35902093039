use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use emblem_core::{Candidate, CandidatePool, Tier};

use crate::schema::emblem_data::EmblemRecord;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    pub fn write_with<F>(&mut self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        f(self).with_context(|| format!("Failed to write to {}", self.display_path()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Which tiers to keep when loading the emblem data.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum TierFilter {
    All,
    Bronze,
    Silver,
    #[default]
    Gold,
}

impl TierFilter {
    pub fn accepts(self, tier: Tier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Bronze => tier == Tier::Bronze,
            TierFilter::Silver => tier == Tier::Silver,
            TierFilter::Gold => tier == Tier::Gold,
        }
    }
}

/// Converts emblem records into candidates, keeping the tiers accepted by `filter`.
pub fn candidates_from_records(
    records: &[EmblemRecord],
    filter: TierFilter,
) -> anyhow::Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let candidate = record
            .to_candidate()
            .with_context(|| format!("Failed to read emblem record #{i}"))?;
        if filter.accepts(candidate.tier()) {
            candidates.push(candidate);
        }
    }
    Ok(candidates)
}

/// Read the emblem data file and build the candidate pool
///
/// # Arguments
///
/// * `path` - Path to the emblem JSON file
/// * `filter` - Tiers to keep
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed, or if no emblem
/// passes the filter
pub fn read_pool_file<P>(path: P, filter: TierFilter) -> anyhow::Result<CandidatePool>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let records: Vec<EmblemRecord> = read_json_file("emblem data", path)?;
    let candidates = candidates_from_records(&records, filter)?;
    log::info!(
        "Loaded {} of {} emblem(s) from {} (tier filter: {filter:?})",
        candidates.len(),
        records.len(),
        path.display()
    );
    CandidatePool::new(candidates)
        .with_context(|| format!("No usable emblem in {} (tier filter: {filter:?})", path.display()))
}
