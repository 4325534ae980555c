use cdrack_core::{entry::parse_id, error::Error, inventory::Inventory, storage, Entry};
use std::{
    io::{self, Write},
    path::Path,
};

const INVENTORY_FILE: &str = "cd_inventory.dat";

fn main() {
    env_logger::init();
    run().unwrap();
}

fn run() -> Result<(), Error> {
    let path = Path::new(INVENTORY_FILE);
    let mut inventory = load_or_bootstrap(path)?;

    loop {
        print_menu();
        match menu_choice()? {
            Choice::Exit => break,
            Choice::Load => reload(path, &mut inventory)?,
            Choice::Add => add_entry(&mut inventory)?,
            Choice::List => show_inventory(&inventory),
            Choice::Delete => delete_entry(&mut inventory)?,
            Choice::Save => save_inventory(path, &inventory)?,
        }
    }
    Ok(())
}

/// Loads the saved inventory, creating the file with an empty one on the
/// first run. Anything other than a missing file is fatal.
fn load_or_bootstrap(path: &Path) -> Result<Inventory, Error> {
    match storage::load(path) {
        Ok(inventory) => Ok(inventory),
        Err(Error::FileNotFound(_)) => {
            println!("File not found! File has now been created.");
            log::info!("creating new inventory file: {:?}", path);
            let inventory = Inventory::new();
            storage::save(path, &inventory)?;
            Ok(inventory)
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Load,
    Add,
    List,
    Delete,
    Save,
    Exit,
}

impl Choice {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::List),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("Menu\n");
    println!("[l] load Inventory from file");
    println!("[a] Add CD");
    println!("[i] Display Current Inventory");
    println!("[d] delete CD from Inventory");
    println!("[s] Save Inventory to file");
    println!("[x] exit\n");
}

/// Re-prompts until one of the six menu letters is entered.
fn menu_choice() -> Result<Choice, Error> {
    loop {
        let input = prompt("Which operation would you like to perform? [l, a, i, d, s or x]: ")?;
        if let Some(choice) = Choice::from_input(&input) {
            println!();
            return Ok(choice);
        }
    }
}

fn reload(path: &Path, inventory: &mut Inventory) -> Result<(), Error> {
    println!("WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.");
    let confirm = prompt("type 'yes' to continue and reload from file. otherwise reload will be canceled: ")?;
    if confirm.eq_ignore_ascii_case("yes") {
        println!("reloading...");
        *inventory = storage::load(path)?;
    } else {
        prompt("canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?;
    }
    show_inventory(inventory);
    Ok(())
}

fn add_entry(inventory: &mut Inventory) -> Result<(), Error> {
    let id_text = prompt("Enter ID: ")?;
    let title = prompt("What is the CD's title? ")?;
    let artist = prompt("What is the Artist's name? ")?;
    if inventory.add(&id_text, &title, &artist).is_err() {
        println!("The ID entered is NOT an integer!");
        println!("Entry not saved - Please enter ID as an integer!\n");
    }
    show_inventory(inventory);
    Ok(())
}

fn delete_entry(inventory: &mut Inventory) -> Result<(), Error> {
    show_inventory(inventory);
    let id_text = prompt("Which ID would you like to delete? ")?;
    let id = match parse_id(&id_text) {
        Ok(id) => id,
        Err(_) => {
            println!("ID entered is not an integer. Please try again.");
            return Ok(());
        }
    };
    match inventory.delete(id) {
        Ok(_) => println!("The CD was removed"),
        Err(_) => println!("Could not find this CD!"),
    }
    show_inventory(inventory);
    Ok(())
}

fn save_inventory(path: &Path, inventory: &Inventory) -> Result<(), Error> {
    show_inventory(inventory);
    let confirm = prompt("Save this inventory to file? [y/n] ")?;
    if confirm.eq_ignore_ascii_case("y") {
        storage::save(path, inventory)?;
    } else {
        prompt("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")?;
    }
    Ok(())
}

fn show_inventory(inventory: &Inventory) {
    println!("======= The Current Inventory: =======");
    println!("ID\tCD Title (by: Artist)\n");
    for entry in inventory.entries() {
        println!("{}", format_entry(entry));
    }
    println!("======================================");
}

fn format_entry(entry: &Entry) -> String {
    format!("{}\t{} (by:{})", entry.id, entry.title, entry.artist)
}

/// Prints `message`, then blocks on one line of input and returns it
/// trimmed. A closed stdin is an unanticipated failure.
fn prompt(message: &str) -> Result<String, Error> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim().to_string())
}
