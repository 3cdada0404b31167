//! `folio id` – print a fresh entity id.

use folio_core::entity::create_id;

pub fn run_id() {
    println!("{}", create_id());
}
