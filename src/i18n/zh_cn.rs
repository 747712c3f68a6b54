// ============================================================================
// TransHelper - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 配置相关
    ("config.loaded", "已加载配置文件: {}"),
    ("config.not_found", "未找到配置文件，使用默认配置"),
    // 创建相关
    ("create.exists", "键 '{}' 已存在于 {}/{}: {}"),
    ("create.created", "已创建 '{}' => '{}'"),
    ("create.written", "目录文件已写入: {}"),
    // 默认值相关
    (
        "defaults.no_dir",
        "未配置默认值文件目录 (creator.default_yml_dir)",
    ),
    ("defaults.not_found", "语言 {} 没有可用的默认值文件: {}"),
    ("defaults.header", "默认值来自 {}（共 {} 条）"),
    // 列表相关
    ("list.scanning", "扫描目录文件夹: {}"),
    ("list.empty", "未找到目录文件"),
    ("list.entry", "{} [{} / {} / {}] {} 条"),
    ("list.invalid", "跳过无法读取的目录文件 {}: {}"),
    ("list.total", "共 {} 个目录文件，{} 条翻译"),
    // 初始化相关
    ("init.start", "正在初始化 TransHelper 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    (
        "init.next_steps",
        "下一步: 编辑 [creator] 与 [translator] 配置，然后运行 'transhelper trans <key> -l <locale>'",
    ),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 错误信息
    ("error.param_format", "参数 '{}' 格式错误，应为 name=value"),
    ("error.dir_not_exist", "目录不存在: {}"),
    ("error.walk_directory", "遍历目录失败"),
];
