use crate::{error::Error, inventory::Inventory};
use std::{fs, io, path::Path};

// Whole-collection snapshot persistence. The inventory is small, so both
// directions are single blocking read/write calls of the full file.

pub fn load(path: &Path) -> Result<Inventory, Error> {
    let buf = fs::read(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::IoError(err)
        }
    })?;
    let inventory = bincode::deserialize(&buf)?;
    log::debug!("loaded inventory snapshot: {:?}", path);
    Ok(inventory)
}

pub fn save(path: &Path, inventory: &Inventory) -> Result<(), Error> {
    let buf = bincode::serialize(inventory)?;
    fs::write(path, buf)?;
    log::debug!("saved inventory snapshot: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn save_then_load_round_trips_entries_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");

        let mut inv = Inventory::new();
        inv.add("7", "Moon", "Eno").unwrap();
        inv.add("3", "Remain in Light", "Talking Heads").unwrap();
        inv.add("7", "Moon", "Eno").unwrap();

        save(&path, &inv).unwrap();
        assert_eq!(load(&path).unwrap(), inv);
    }

    #[test]
    fn load_of_missing_file_reports_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.dat");
        assert!(matches!(load(&path), Err(Error::FileNotFound(_))));
    }

    #[test]
    fn load_of_garbage_reports_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xffnot a snapshot").unwrap();
        assert!(matches!(load(&path), Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn save_overwrites_previous_contents_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");

        let mut inv = Inventory::new();
        inv.add("1", "Low", "Bowie").unwrap();
        save(&path, &inv).unwrap();

        inv.delete(1).unwrap();
        save(&path, &inv).unwrap();
        assert_eq!(load(&path).unwrap(), Inventory::new());
    }

    #[test]
    fn empty_inventory_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        save(&path, &Inventory::new()).unwrap();
        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
