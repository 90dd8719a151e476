//! CLI Command Tests
//!
//! Argument parsing, exit codes and item building against the bundled
//! demo catalog.

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

mod cli_parsing {
    use clap::Parser;
    use showdetail::cli::{Cli, Command};

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["showdetail"]);
        assert!(!cli.is_cli_mode());
        assert!(cli.show.is_none());
    }

    #[test]
    fn test_show_flag_for_tui() {
        let cli = Cli::parse_from(["showdetail", "--show", "1390"]);
        assert!(!cli.is_cli_mode());
        assert_eq!(cli.show, Some(1390));
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["showdetail", "list"]);
        assert!(cli.is_cli_mode());
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["showdetail", "ls"]);
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_items_command() {
        let cli = Cli::parse_from(["showdetail", "items", "1390"]);
        match cli.command {
            Some(Command::Items(cmd)) => {
                assert_eq!(cmd.trakt_id, 1390);
                assert!(!cmd.no_related);
            }
            _ => panic!("Expected Items command"),
        }
    }

    #[test]
    fn test_items_no_related() {
        let cli = Cli::parse_from(["showdetail", "items", "1390", "--no-related"]);
        match cli.command {
            Some(Command::Items(cmd)) => assert!(cmd.no_related),
            _ => panic!("Expected Items command"),
        }
    }

    #[test]
    fn test_items_requires_numeric_id() {
        assert!(Cli::try_parse_from(["showdetail", "items", "got"]).is_err());
        assert!(Cli::try_parse_from(["showdetail", "items"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "showdetail",
            "items",
            "1",
            "--json",
            "--quiet",
            "--catalog",
            "shows.json",
            "--log",
            "debug",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(cli.should_json());
        assert_eq!(
            cli.catalog.as_deref(),
            Some(std::path::Path::new("shows.json"))
        );
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["showdetail", "play", "1"]).is_err());
    }
}

// =============================================================================
// Command Tests
// =============================================================================

mod commands {
    use showdetail::cli::{ExitCode, ItemsCmd, Output};
    use showdetail::commands::{build_items, describe, items_cmd, list_cmd};
    use showdetail::details::{ItemId, UiItem};
    use showdetail::images::TmdbImageUrlProvider;
    use showdetail::models::ShowCatalog;
    use showdetail::resources::Resources;

    fn demo() -> ShowCatalog {
        ShowCatalog::demo().unwrap()
    }

    fn quiet_json() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    fn items(trakt_id: u64, no_related: bool) -> Result<Vec<UiItem>, (String, ExitCode)> {
        build_items(
            &ItemsCmd {
                trakt_id,
                no_related,
            },
            &demo(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
        )
    }

    #[test]
    fn test_list_succeeds() {
        assert_eq!(list_cmd(&demo(), &quiet_json()), ExitCode::Success);
    }

    #[test]
    fn test_related_posters_follow_catalog_order() {
        let items = items(1390, false).unwrap();
        let poster_ids: Vec<_> = items
            .iter()
            .filter_map(UiItem::as_poster)
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(
            poster_ids,
            vec![
                ItemId::Numeric(1388),
                ItemId::Numeric(60300),
                ItemId::Numeric(1395)
            ]
        );
    }

    #[test]
    fn test_empty_related_entry_keeps_header() {
        let items = items(1395, false).unwrap();
        assert!(items.iter().any(|i| matches!(i, UiItem::Header(_))));
        assert!(items.iter().all(|i| i.as_poster().is_none()));
    }

    #[test]
    fn test_no_related_flag_drops_section() {
        let items = items(1390, true).unwrap();
        assert!(items.iter().all(|i| !matches!(i, UiItem::Header(_))));
    }

    #[test]
    fn test_singular_runtime() {
        let items = items(102034, true).unwrap();
        let runtime = items
            .iter()
            .filter_map(UiItem::as_badge)
            .find(|b| b.id == ItemId::Key("runtime"))
            .unwrap();
        assert_eq!(runtime.content_description, "Runtime of 1 minute");
    }

    #[test]
    fn test_unknown_show_is_not_found() {
        let code = items_cmd(
            ItemsCmd {
                trakt_id: 7,
                no_related: false,
            },
            &demo(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
            &quiet_json(),
        );
        assert_eq!(code, ExitCode::NotFound);
    }

    #[test]
    fn test_items_json_shape() {
        let items = items(1390, false).unwrap();
        let json = serde_json::to_value(&items).unwrap();
        assert_eq!(json[0]["type"], "title");
        assert_eq!(json[0]["id"], "title");
        let last = json.as_array().unwrap().last().unwrap();
        assert_eq!(last["type"], "poster");
        assert_eq!(last["id"], 1395);
    }

    #[test]
    fn test_describe_header() {
        let items = items(1390, false).unwrap();
        let header = items
            .iter()
            .find(|i| matches!(i, UiItem::Header(_)))
            .unwrap();
        assert!(describe(header).ends_with("related_header  Related"));
    }
}
