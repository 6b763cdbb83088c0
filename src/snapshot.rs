use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CutoffError;
use crate::ladder::Cutoffs;
use crate::platform::{Platform, QueueType};

/// Platform code -> queue type -> cutoffs. Ordered maps keep the file stable run to run.
pub type CutoffSnapshot = BTreeMap<Platform, BTreeMap<QueueType, Cutoffs>>;

pub fn insert_cutoffs(
    snapshot: &mut CutoffSnapshot,
    platform: Platform,
    queue: QueueType,
    cutoffs: Cutoffs,
) {
    snapshot.entry(platform).or_default().insert(queue, cutoffs);
}

pub fn snapshot_to_json(snapshot: &CutoffSnapshot) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    snapshot.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Replaces `path` with the snapshot in one rename, so readers never see a half-written file.
pub fn write_snapshot(path: &Path, snapshot: &CutoffSnapshot) -> Result<(), CutoffError> {
    let output_err = |message: String| CutoffError::Output {
        path: path.to_path_buf(),
        message,
    };
    let json = snapshot_to_json(snapshot).map_err(|err| output_err(err.to_string()))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|err| output_err(format!("create directory: {err}")))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|err| output_err(format!("write: {err}")))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(output_err(format!("swap: {err}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_and_indent() {
        let mut snapshot = CutoffSnapshot::new();
        insert_cutoffs(
            &mut snapshot,
            Platform::Na1,
            QueueType::RankedSolo,
            Cutoffs {
                grandmaster: 612,
                challenger: 1030,
            },
        );
        let json = snapshot_to_json(&snapshot).unwrap();
        let expected = "{\n    \"NA1\": {\n        \"RANKED_SOLO_5x5\": {\n            \"grandmaster\": 612,\n            \"challenger\": 1030\n        }\n    }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn failed_swap_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_snapshot(dir.path(), &CutoffSnapshot::new()).unwrap_err();
        assert!(matches!(err, CutoffError::Output { .. }));
        assert!(!dir.path().with_extension("json.tmp").exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn platforms_are_ordered() {
        let mut snapshot = CutoffSnapshot::new();
        let c = Cutoffs {
            grandmaster: 200,
            challenger: 500,
        };
        insert_cutoffs(&mut snapshot, Platform::Tr1, QueueType::RankedFlex, c);
        insert_cutoffs(&mut snapshot, Platform::Br1, QueueType::RankedFlex, c);
        insert_cutoffs(&mut snapshot, Platform::Br1, QueueType::RankedSolo, c);
        let json = snapshot_to_json(&snapshot).unwrap();
        let br = json.find("BR1").unwrap();
        let tr = json.find("TR1").unwrap();
        assert!(br < tr);
        assert!(json.find("RANKED_SOLO_5x5").unwrap() < json.find("RANKED_FLEX_SR").unwrap());
    }
}
