// ============================================================================
// TransHelper - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Config related
    ("config.loaded", "Loaded config file: {}"),
    (
        "config.not_found",
        "No config file found, using default settings",
    ),
    // Create related
    ("create.exists", "Key '{}' already exists in {}/{}: {}"),
    ("create.created", "Created '{}' => '{}'"),
    ("create.written", "Catalogue written to: {}"),
    // Defaults related
    (
        "defaults.no_dir",
        "No default value directory configured (creator.default_yml_dir)",
    ),
    (
        "defaults.not_found",
        "No usable default value file for locale {}: {}",
    ),
    ("defaults.header", "Default values from {} ({} entries)"),
    // List related
    ("list.scanning", "Scanning catalogue directory: {}"),
    ("list.empty", "No catalogue files found"),
    ("list.entry", "{} [{} / {} / {}] {} entries"),
    ("list.invalid", "Skipping unreadable catalogue {}: {}"),
    ("list.total", "{} catalogue files, {} entries in total"),
    // Init related
    ("init.start", "Initializing TransHelper configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Config file created: {}"),
    (
        "init.next_steps",
        "Next: edit the [creator] and [translator] sections, then run 'transhelper trans <key> -l <locale>'",
    ),
    ("init.create_failed", "Failed to create config file: {}"),
    // Error messages
    (
        "error.param_format",
        "Invalid parameter '{}', expected name=value",
    ),
    ("error.dir_not_exist", "Directory does not exist: {}"),
    ("error.walk_directory", "Failed to walk directory"),
];
