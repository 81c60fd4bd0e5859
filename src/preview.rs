use crate::plan::ScaffoldPlan;
use colored::Colorize;
use std::collections::HashSet;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the tree from the plan entries, returning the root node.
fn build_tree(plan: &ScaffoldPlan) -> TreeNode {
    let destination = &plan.target_dir;

    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut root = TreeNode::new(root_name, false);

    // a repeated filename overwrites the earlier one, so list it once
    let mut seen: HashSet<&std::path::Path> = HashSet::new();

    for entry in &plan.entries {
        if !seen.insert(entry.destination.as_path()) {
            log::debug!("duplicate entry: {}", entry.destination.display());
            continue;
        }

        let child_name = entry
            .destination
            .strip_prefix(destination)
            .unwrap_or(&entry.destination)
            .display()
            .to_string();

        root.children.push(TreeNode::new(child_name, true));
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

pub fn preview_as_tree(plan: &ScaffoldPlan) {
    let tree_root = build_tree(plan);

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    print_tree(&tree_root, "", true);

    println!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        "Dry run, nothing was written".bright_green()
    );
}
