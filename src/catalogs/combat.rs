use crate::action::ActionRecord;
use crate::catalog::Catalog;

pub fn catalog() -> Catalog {
    Catalog::from_records(vec![
        ActionRecord::new(
            "sword_attack",
            "Sword Attack",
            "1d20 + @strength_mod + @proficiency",
            "damage(target, 1d8 + @strength_mod)",
        )
        .with_check("roll.total", ">=", "target.ac"),
        ActionRecord::new("initiative", "Roll Initiative", "1d20 + @dexterity_mod", ""),
    ])
    .expect("fixture ids are unique")
}
