//! Integration tests for filetree
//!
//! These tests drive the public API the way the UI does: build a tree from
//! a path list, flatten it into rows, click rows, and check what changed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filetree::core::{AppState, SelectedFile, SelectionLog};
use filetree::handler::{
    click_path, click_row, handle_action, handle_key_event, ActionResult, ClickOutcome, KeyAction,
};
use filetree::integrate::{exit_code, print_tree, TreeOutputOptions};
use filetree::render::{file_icon, folder_icon, format_row, Icon};
use filetree::tree::{
    build_filtered_tree, build_tree, count_leaves, filter_paths, PathFilter, TreeNavigator,
};
use std::collections::HashSet;

fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn navigator(files: &[&str]) -> TreeNavigator {
    TreeNavigator::new(files.iter().copied(), PathFilter::default())
}

fn row_names(nav: &TreeNavigator) -> Vec<String> {
    nav.visible_entries()
        .iter()
        .map(|row| row.node.name.clone())
        .collect()
}

// =============================================================================
// Tree Building
// =============================================================================

mod tree_tests {
    use super::*;

    #[test]
    fn test_directories_sort_before_files() {
        let roots = build_filtered_tree(
            ["src/index.ts", "src/utils/helpers.ts", "README.md"],
            &PathFilter::default(),
        );

        assert_eq!(roots.len(), 2);
        let sorted = filetree::tree::sort_nodes(&roots);
        assert_eq!(sorted[0].name, "src");
        assert!(sorted[0].is_dir);
        assert_eq!(sorted[1].name, "README.md");
        assert!(!sorted[1].is_dir);

        let src_children = sorted[0].sorted_children();
        let names: Vec<_> = src_children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["utils", "index.ts"]);
    }

    #[test]
    fn test_lockfile_is_excluded() {
        let roots = build_filtered_tree(["package-lock.json", "src/app.ts"], &PathFilter::default());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "src");
        assert_eq!(roots[0].children()[0].path, "src/app.ts");
    }

    #[test]
    fn test_duplicate_paths_collapse() {
        let roots = build_tree(["a/b.txt", "a/b.txt"]);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].is_dir);
        assert_eq!(roots[0].children().len(), 1);
        assert_eq!(roots[0].children()[0].name, "b.txt");
    }

    #[test]
    fn test_paths_match_segments() {
        let roots = build_tree(["a/b/c.rs", "a/d.rs"]);
        let mut seen = Vec::new();
        for root in &roots {
            root.walk(&mut |node| seen.push(node.path.clone()));
        }
        seen.sort();
        assert_eq!(seen, vec!["a", "a/b", "a/b/c.rs", "a/d.rs"]);
    }

    #[test]
    fn test_filter_keeps_order_and_normalizes() {
        let kept = filter_paths(["src\\b.ts", "dist/x.js", "src/a.ts"]);
        assert_eq!(kept, vec!["src/b.ts", "src/a.ts"]);
    }

    // Path lists mixing nesting, duplicates, backslashes, excluded noise and
    // empty segments. A directory path never precedes the same path as a file.
    const MIXED_INPUTS: &[&[&str]] = &[
        &["src/index.ts", "src/utils/helpers.ts", "README.md"],
        &["a/b.txt", "a/b.txt", "a/c.txt"],
        &[r"src\lib\mod.rs", "src/lib/mod.rs", "src/main.rs"],
        &["package-lock.json", "node_modules/x/index.js", "src/app.ts", "dist/bundle.js"],
        &["/abs/file", "dir//x", "trailing/", "dir//x"],
        &["a", "a/b.txt"],
        &[],
    ];

    #[test]
    fn test_leaf_count_matches_unique_paths() {
        for input in MIXED_INPUTS {
            let roots = build_filtered_tree(input.iter().copied(), &PathFilter::default());
            let unique: HashSet<String> = filter_paths(input.iter().copied()).into_iter().collect();
            assert_eq!(count_leaves(&roots), unique.len(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        for input in MIXED_INPUTS {
            let first = build_filtered_tree(input.iter().copied(), &PathFilter::default());
            let second = build_filtered_tree(input.iter().copied(), &PathFilter::default());
            assert_eq!(first, second, "input: {:?}", input);
        }
    }

    #[test]
    fn test_custom_filter() {
        let filter = PathFilter::new(false, &[r"\.snap$".to_string()]).unwrap();
        let roots = build_filtered_tree(["yarn.lock", "t/a.snap", "t/a.rs"], &filter);
        let names: Vec<_> = roots.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"yarn.lock"));
        assert!(roots.iter().any(|n| n.find("t/a.rs").is_some()));
        assert!(roots.iter().all(|n| n.find("t/a.snap").is_none()));
    }
}

// =============================================================================
// Click Handling
// =============================================================================

mod click_tests {
    use super::*;

    #[test]
    fn test_click_file_publishes_selection() {
        let mut nav = navigator(&["src/app.ts", "src/lib/x.ts"]);
        nav.expand("src");
        let before = nav.expansion().clone();

        let mut log = SelectionLog::new();
        let outcome = click_path(&mut nav, "src/app.ts", &mut log);

        assert_eq!(outcome, ClickOutcome::Selected(SelectedFile::new("src/app.ts")));
        assert_eq!(log.current(), Some(&SelectedFile::new("src/app.ts")));
        assert_eq!(nav.expansion().expanded_paths(), before.expanded_paths());
    }

    #[test]
    fn test_click_directory_toggles_only_itself() {
        let mut nav = navigator(&["a/x/1.rs", "a/y/2.rs", "b/3.rs"]);
        nav.expand("a/x");
        nav.expand("b");

        let mut log = SelectionLog::new();
        let outcome = click_path(&mut nav, "a", &mut log);

        assert_eq!(
            outcome,
            ClickOutcome::Toggled {
                path: "a".to_string(),
                expanded: true
            }
        );
        assert!(nav.is_expanded("a"));
        assert!(nav.is_expanded("a/x"));
        assert!(!nav.is_expanded("a/y"));
        assert!(nav.is_expanded("b"));
        assert!(log.history().is_empty());

        click_path(&mut nav, "a", &mut log);
        assert!(!nav.is_expanded("a"));
        assert!(nav.is_expanded("a/x"));
    }

    #[test]
    fn test_collapsed_directory_keeps_child_state() {
        let mut nav = navigator(&["a/x/1.rs"]);
        let mut log = SelectionLog::new();

        click_row(&mut nav, 0, &mut log); // open a
        click_row(&mut nav, 1, &mut log); // open a/x
        assert_eq!(row_names(&nav), vec!["a", "x", "1.rs"]);

        click_row(&mut nav, 0, &mut log); // close a
        assert_eq!(row_names(&nav), vec!["a"]);

        click_row(&mut nav, 0, &mut log); // reopen a, x is still open
        assert_eq!(row_names(&nav), vec!["a", "x", "1.rs"]);
    }

    #[test]
    fn test_closure_sink() {
        let mut nav = navigator(&["README.md"]);
        let mut picked = Vec::new();
        let mut sink = |selected: &SelectedFile| picked.push(selected.path.clone());

        click_row(&mut nav, 0, &mut sink);
        assert_eq!(picked, vec!["README.md"]);
    }
}

// =============================================================================
// Keyboard Flow
// =============================================================================

mod key_tests {
    use super::*;

    fn press(
        nav: &mut TreeNavigator,
        state: &mut AppState,
        log: &mut SelectionLog,
        code: KeyCode,
    ) -> ActionResult {
        let action = handle_key_event(state, key_event(code));
        handle_action(action, nav, state, log)
    }

    #[test]
    fn test_browse_and_select() {
        let mut nav = navigator(&["src/index.ts", "src/utils/helpers.ts", "README.md"]);
        let mut state = AppState::new();
        let mut log = SelectionLog::new();

        press(&mut nav, &mut state, &mut log, KeyCode::Enter); // open src
        assert_eq!(row_names(&nav), vec!["src", "utils", "index.ts", "README.md"]);

        press(&mut nav, &mut state, &mut log, KeyCode::Char('j'));
        press(&mut nav, &mut state, &mut log, KeyCode::Char('j'));
        press(&mut nav, &mut state, &mut log, KeyCode::Enter);
        assert_eq!(state.selected, Some(SelectedFile::new("src/index.ts")));

        press(&mut nav, &mut state, &mut log, KeyCode::Char('h')); // to parent
        assert_eq!(state.focus_index, 0);
        press(&mut nav, &mut state, &mut log, KeyCode::Char('h')); // close src
        assert_eq!(row_names(&nav), vec!["src", "README.md"]);
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let mut nav = navigator(&["a/b/c.rs", "d/e.rs"]);
        let mut state = AppState::new();
        let mut log = SelectionLog::new();

        press(&mut nav, &mut state, &mut log, KeyCode::Char('L'));
        assert_eq!(nav.visible_count(), 5);
        press(&mut nav, &mut state, &mut log, KeyCode::Char('G'));
        assert_eq!(state.focus_index, 4);

        press(&mut nav, &mut state, &mut log, KeyCode::Char('H'));
        assert_eq!(nav.visible_count(), 2);
        assert_eq!(state.focus_index, 0);
    }

    #[test]
    fn test_pick_mode_cancel() {
        let mut nav = navigator(&["a.rs"]);
        let mut state = AppState::new();
        state.pick_mode = true;
        let mut log = SelectionLog::new();

        let result = press(&mut nav, &mut state, &mut log, KeyCode::Esc);
        assert_eq!(result, ActionResult::Quit(exit_code::CANCELLED));
    }

    #[test]
    fn test_help_toggle() {
        let mut nav = navigator(&["a.rs"]);
        let mut state = AppState::new();
        let mut log = SelectionLog::new();

        press(&mut nav, &mut state, &mut log, KeyCode::Char('?'));
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('j'))),
            KeyAction::ToggleHelp
        );
    }
}

// =============================================================================
// Rendering
// =============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_icon_choice() {
        assert_eq!(file_icon("main.ts"), Icon::FileCode);
        assert_eq!(file_icon("archive.tar.gz"), Icon::File);
        assert_eq!(file_icon("Makefile"), Icon::File);
        assert_eq!(folder_icon("docs", false), Icon::Book);
        assert_eq!(folder_icon("src", true), Icon::FolderOpen);
        assert_eq!(folder_icon("src", false), Icon::Folder);
    }

    #[test]
    fn test_rows_are_indented_by_depth() {
        let mut nav = navigator(&["src/utils/helpers.ts"]);
        nav.expand_all();
        let rows = nav.visible_entries();
        let text: Vec<_> = rows.iter().map(|row| format_row(row, false, 2)).collect();
        assert_eq!(text[0], format!("{} src", Icon::FolderOpen.ascii()));
        assert_eq!(text[1], format!("  {} utils", Icon::FolderTree.ascii()));
        assert_eq!(text[2], format!("    {} helpers.ts", Icon::FileCode.ascii()));
    }

    #[test]
    fn test_printed_tree() {
        let roots = build_filtered_tree(["b/y.rs", "a.rs", "b/x.rs"], &PathFilter::default());
        let mut out = Vec::new();
        print_tree(&mut out, &roots, TreeOutputOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "├── b/\n│   ├── x.rs\n│   └── y.rs\n└── a.rs\n"
        );
    }
}
