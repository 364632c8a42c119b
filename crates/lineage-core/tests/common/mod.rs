use lineage_core::{apply, FamilyTree, Sex, TreeEvent};

/// Create a tree holding only a root person
#[allow(dead_code)]
pub fn tree_with_root(name: &str, sex: Sex) -> FamilyTree {
    let mut tree = FamilyTree::new();
    apply(
        &mut tree,
        TreeEvent::CreateRoot {
            name: name.to_string(),
            sex,
        },
    )
    .unwrap();
    tree
}

/// Marry a newcomer into the tree (test setup, panics on failure)
#[allow(dead_code)]
pub fn marry(tree: &mut FamilyTree, person: &str, spouse: &str) {
    apply(
        tree,
        TreeEvent::Marry {
            person: person.to_string(),
            spouse: spouse.to_string(),
        },
    )
    .unwrap_or_else(|e| panic!("marry {person} + {spouse}: {e}"));
}

/// Add a child to a married parent (test setup, panics on failure)
#[allow(dead_code)]
pub fn child(tree: &mut FamilyTree, parent: &str, name: &str, sex: Sex) {
    apply(
        tree,
        TreeEvent::AddChild {
            parent: parent.to_string(),
            child: name.to_string(),
            sex,
        },
    )
    .unwrap_or_else(|e| panic!("child {name} of {parent}: {e}"));
}

/// King Shan, Queen Anga and their five children, unmarried
#[allow(dead_code)]
pub fn first_generation() -> FamilyTree {
    let mut tree = tree_with_root("King Shan", Sex::Male);
    marry(&mut tree, "King Shan", "Queen Anga");
    for (name, sex) in [
        ("Chit", Sex::Male),
        ("Ish", Sex::Male),
        ("Vich", Sex::Male),
        ("Aras", Sex::Male),
        ("Satya", Sex::Female),
    ] {
        child(&mut tree, "King Shan", name, sex);
    }
    tree
}

/// The full Lengaburu family across four generations
#[allow(dead_code)]
pub fn lengaburu() -> FamilyTree {
    let mut tree = first_generation();

    marry(&mut tree, "Chit", "Amba");
    marry(&mut tree, "Vich", "Lika");
    marry(&mut tree, "Aras", "Chitra");
    marry(&mut tree, "Satya", "Vyan");

    child(&mut tree, "Chit", "Dritha", Sex::Female);
    child(&mut tree, "Chit", "Tritha", Sex::Female);
    child(&mut tree, "Chit", "Vritha", Sex::Male);
    marry(&mut tree, "Dritha", "Jaya");
    child(&mut tree, "Dritha", "Yodhan", Sex::Male);

    child(&mut tree, "Vich", "Vila", Sex::Female);
    child(&mut tree, "Vich", "Chika", Sex::Female);

    child(&mut tree, "Aras", "Jnki", Sex::Female);
    child(&mut tree, "Aras", "Ahit", Sex::Male);
    marry(&mut tree, "Jnki", "Arit");
    child(&mut tree, "Jnki", "Laki", Sex::Male);
    child(&mut tree, "Jnki", "Lavnya", Sex::Female);

    child(&mut tree, "Satya", "Asva", Sex::Male);
    child(&mut tree, "Satya", "Vyas", Sex::Male);
    child(&mut tree, "Satya", "Atya", Sex::Female);
    marry(&mut tree, "Asva", "Satvy");
    child(&mut tree, "Asva", "Vasa", Sex::Male);
    marry(&mut tree, "Vyas", "Krpi");
    child(&mut tree, "Vyas", "Kriya", Sex::Male);
    child(&mut tree, "Vyas", "Krithi", Sex::Female);

    tree
}
