pub const RULE_WIDTH: usize = 72;
pub const SKELETON_LINE: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const PROMPT: &str = "> ";

pub const HELP_LINES: [&str; 7] = [
    "category <ai|ml|robotics|nlp|cv>   show a category",
    "search <text>                      search (empty text clears)",
    "summary <n>                        toggle the AI summary of card n",
    "lang <en|fr>                       switch language",
    "theme <light|dark|system>          switch colour theme",
    "help                               show this list",
    "quit                               leave",
];
