use crate::action::ActionRecord;
use crate::catalog::Catalog;

pub fn catalog() -> Catalog {
    Catalog::from_records(vec![ActionRecord::new(
        "sword_attack",
        "Sword Attack",
        "1d20 + @strength_mod + @proficiency",
        "damage(target, 1d8 + @strength_mod)",
    )])
    .expect("fixture ids are unique")
}
