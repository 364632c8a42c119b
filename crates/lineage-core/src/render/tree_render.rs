use crate::errors::{FamilyError, Result};
use crate::ops::{FamilyTree, PersonRef};

const INDENT: &str = "  ";

/// Render the whole tree as an indented outline
///
/// One line per blood relative, with their spouse after `=`; children are
/// indented one level under their parents, in insertion order.
///
/// ```text
/// King Shan (male) = Queen Anga (female)
///   Chit (male) = Amba (female)
///     Dritha (female)
/// ```
///
/// # Errors
/// * `TreeEmpty` - If the tree has no root
pub fn render_tree(tree: &FamilyTree) -> Result<String> {
    let root = tree.root().ok_or(FamilyError::TreeEmpty)?;

    let mut output = String::new();
    render_branch(root, 0, &mut output);
    Ok(output)
}

fn render_branch(person: PersonRef<'_>, depth: usize, output: &mut String) {
    output.push_str(&INDENT.repeat(depth));
    output.push_str(&format!("{} ({})", person.name(), person.sex()));
    if let Some(spouse) = person.spouse() {
        output.push_str(&format!(" = {} ({})", spouse.name(), spouse.sex()));
    }
    output.push('\n');

    for child in person.children() {
        render_branch(child, depth + 1, output);
    }
}
