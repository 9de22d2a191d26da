//! Terminal vocabulary of the MySQL grammar.
//!
//! Every terminal has a display name in the style of the MySQL Workbench lexer:
//! keywords are `<TEXT>_SYMBOL`, fixed punctuation is the quoted literal (`'('`)
//! and lexical classes are upper-case names (`IDENTIFIER`).

macro_rules! define_tokens {
    (
        symbols { $($symbol:ident => $symbol_name:literal,)* }
        keywords { $($keyword:ident => $text:literal $(, $reserved:ident)?;)* }
    ) => {
        /// A grammar terminal.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $($symbol,)*
            $($keyword,)*
        }

        impl TokenKind {
            /// Every keyword terminal, in declaration order.
            pub const KEYWORDS: &'static [TokenKind] = &[$(TokenKind::$keyword,)*];

            /// Grammar display name, e.g. `SELECT_SYMBOL`, `'('` or `IDENTIFIER`.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(TokenKind::$symbol => $symbol_name,)*
                    $(TokenKind::$keyword => concat!($text, "_SYMBOL"),)*
                }
            }

            /// Source spelling of a keyword terminal.
            pub fn keyword_text(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$keyword => Some($text),)*
                    _ => None,
                }
            }

            /// Reserved keywords cannot be used as unquoted identifiers.
            pub fn is_reserved(self) -> bool {
                match self {
                    $(TokenKind::$keyword => define_tokens!(@reserved $($reserved)?),)*
                    _ => false,
                }
            }

            fn from_primary_text(upper: &str) -> Option<TokenKind> {
                match upper {
                    $($text => Some(TokenKind::$keyword),)*
                    _ => None,
                }
            }
        }
    };
    (@reserved reserved) => { true };
    (@reserved) => { false };
}

define_tokens! {
    symbols {
        Eof => "EOF",
        Invalid => "INVALID_INPUT",
        Whitespace => "WHITESPACE",
        Comment => "COMMENT",
        Equal => "'='",
        Assign => "':='",
        NullSafeEqual => "'<=>'",
        GreaterOrEqual => "'>='",
        Greater => "'>'",
        LessOrEqual => "'<='",
        Less => "'<'",
        NotEqual => "'!='",
        Plus => "'+'",
        Minus => "'-'",
        Mult => "'*'",
        Divide => "'/'",
        Modulo => "'%'",
        LogicalNot => "'!'",
        BitwiseNot => "'~'",
        ShiftLeft => "'<<'",
        ShiftRight => "'>>'",
        LogicalAnd => "'&&'",
        BitwiseAnd => "'&'",
        BitwiseXor => "'^'",
        LogicalOr => "'||'",
        BitwiseOr => "'|'",
        ConcatPipes => "CONCAT_PIPES_SYMBOL",
        Dot => "'.'",
        Comma => "','",
        Semicolon => "';'",
        Colon => "':'",
        OpenPar => "'('",
        ClosePar => "')'",
        OpenCurly => "'{'",
        CloseCurly => "'}'",
        AtSign => "'@'",
        AtAt => "'@@'",
        ParamMarker => "'?'",
        JsonSeparator => "'->'",
        JsonUnquotedSeparator => "'->>'",
        Identifier => "IDENTIFIER",
        BackTickQuotedId => "BACK_TICK_QUOTED_ID",
        SingleQuotedText => "SINGLE_QUOTED_TEXT",
        DoubleQuotedText => "DOUBLE_QUOTED_TEXT",
        NcharText => "NCHAR_TEXT",
        IntNumber => "INT_NUMBER",
        DecimalNumber => "DECIMAL_NUMBER",
        FloatNumber => "FLOAT_NUMBER",
        HexNumber => "HEX_NUMBER",
        BinNumber => "BIN_NUMBER",
        Not2 => "NOT2_SYMBOL",
    }
    keywords {
        Action => "ACTION";
        Add => "ADD", reserved;
        Adddate => "ADDDATE";
        After => "AFTER";
        Against => "AGAINST";
        Algorithm => "ALGORITHM";
        All => "ALL", reserved;
        Alter => "ALTER", reserved;
        Analyze => "ANALYZE", reserved;
        And => "AND", reserved;
        Any => "ANY";
        As => "AS", reserved;
        Asc => "ASC", reserved;
        Ascii => "ASCII";
        AutoIncrement => "AUTO_INCREMENT";
        Avg => "AVG";
        Before => "BEFORE", reserved;
        Begin => "BEGIN";
        Between => "BETWEEN", reserved;
        Bigint => "BIGINT", reserved;
        Binary => "BINARY", reserved;
        Binlog => "BINLOG";
        Bit => "BIT";
        BitAnd => "BIT_AND";
        BitOr => "BIT_OR";
        BitXor => "BIT_XOR";
        Blob => "BLOB", reserved;
        Bool => "BOOL";
        Boolean => "BOOLEAN";
        Btree => "BTREE";
        By => "BY", reserved;
        Cache => "CACHE";
        Call => "CALL", reserved;
        Cascade => "CASCADE", reserved;
        Cascaded => "CASCADED";
        Case => "CASE", reserved;
        Cast => "CAST";
        Chain => "CHAIN";
        Change => "CHANGE", reserved;
        Changed => "CHANGED";
        Char => "CHAR", reserved;
        Charset => "CHARSET";
        Check => "CHECK", reserved;
        Checksum => "CHECKSUM";
        Client => "CLIENT";
        Close => "CLOSE";
        Coalesce => "COALESCE";
        Collate => "COLLATE", reserved;
        Collation => "COLLATION";
        Column => "COLUMN", reserved;
        ColumnFormat => "COLUMN_FORMAT";
        Columns => "COLUMNS";
        Commit => "COMMIT";
        Compact => "COMPACT";
        Component => "COMPONENT";
        Compressed => "COMPRESSED";
        Concurrent => "CONCURRENT";
        Connection => "CONNECTION";
        Consistent => "CONSISTENT";
        Constraint => "CONSTRAINT", reserved;
        Convert => "CONVERT", reserved;
        Count => "COUNT";
        Create => "CREATE", reserved;
        Cross => "CROSS", reserved;
        CumeDist => "CUME_DIST", reserved;
        Curdate => "CURDATE";
        Current => "CURRENT";
        CurrentDate => "CURRENT_DATE", reserved;
        CurrentTime => "CURRENT_TIME", reserved;
        CurrentTimestamp => "CURRENT_TIMESTAMP", reserved;
        CurrentUser => "CURRENT_USER", reserved;
        Curtime => "CURTIME";
        Data => "DATA";
        Database => "DATABASE", reserved;
        Databases => "DATABASES", reserved;
        Date => "DATE";
        DateAdd => "DATE_ADD";
        DateSub => "DATE_SUB";
        Datetime => "DATETIME";
        Day => "DAY";
        DayHour => "DAY_HOUR", reserved;
        DayMicrosecond => "DAY_MICROSECOND", reserved;
        DayMinute => "DAY_MINUTE", reserved;
        DaySecond => "DAY_SECOND", reserved;
        Deallocate => "DEALLOCATE";
        Decimal => "DECIMAL", reserved;
        Default => "DEFAULT", reserved;
        Delayed => "DELAYED", reserved;
        Delete => "DELETE", reserved;
        DenseRank => "DENSE_RANK", reserved;
        Desc => "DESC", reserved;
        Describe => "DESCRIBE", reserved;
        Disable => "DISABLE";
        Distinct => "DISTINCT", reserved;
        Div => "DIV", reserved;
        Do => "DO";
        Double => "DOUBLE", reserved;
        Drop => "DROP", reserved;
        Dual => "DUAL", reserved;
        Dumpfile => "DUMPFILE";
        Duplicate => "DUPLICATE";
        Dynamic => "DYNAMIC";
        Else => "ELSE", reserved;
        Enable => "ENABLE";
        Enclosed => "ENCLOSED", reserved;
        End => "END";
        Enforced => "ENFORCED";
        Engine => "ENGINE";
        Engines => "ENGINES";
        Enum => "ENUM";
        Error => "ERROR";
        Errors => "ERRORS";
        Escape => "ESCAPE";
        Escaped => "ESCAPED", reserved;
        Event => "EVENT";
        Events => "EVENTS";
        Except => "EXCEPT", reserved;
        Execute => "EXECUTE";
        Exists => "EXISTS", reserved;
        Expansion => "EXPANSION";
        Explain => "EXPLAIN", reserved;
        Extended => "EXTENDED";
        Extract => "EXTRACT";
        False => "FALSE", reserved;
        Fast => "FAST";
        File => "FILE";
        Filter => "FILTER";
        First => "FIRST";
        FirstValue => "FIRST_VALUE", reserved;
        Fixed => "FIXED";
        Float => "FLOAT", reserved;
        Flush => "FLUSH";
        Following => "FOLLOWING";
        For => "FOR", reserved;
        Force => "FORCE", reserved;
        Foreign => "FOREIGN", reserved;
        Format => "FORMAT";
        From => "FROM", reserved;
        Full => "FULL";
        Fulltext => "FULLTEXT", reserved;
        General => "GENERAL";
        Geometry => "GEOMETRY";
        Global => "GLOBAL";
        Grant => "GRANT", reserved;
        Grants => "GRANTS";
        Group => "GROUP", reserved;
        GroupConcat => "GROUP_CONCAT";
        Handler => "HANDLER";
        Hash => "HASH";
        Having => "HAVING", reserved;
        Help => "HELP";
        HighPriority => "HIGH_PRIORITY", reserved;
        Hosts => "HOSTS";
        Hour => "HOUR";
        HourMicrosecond => "HOUR_MICROSECOND", reserved;
        HourMinute => "HOUR_MINUTE", reserved;
        HourSecond => "HOUR_SECOND", reserved;
        If => "IF", reserved;
        Ignore => "IGNORE", reserved;
        In => "IN", reserved;
        Index => "INDEX", reserved;
        Indexes => "INDEXES";
        Infile => "INFILE", reserved;
        Inner => "INNER", reserved;
        Insert => "INSERT", reserved;
        Install => "INSTALL";
        Int => "INT", reserved;
        Intersect => "INTERSECT", reserved;
        Interval => "INTERVAL", reserved;
        Into => "INTO", reserved;
        Invisible => "INVISIBLE";
        Is => "IS", reserved;
        Join => "JOIN", reserved;
        Json => "JSON";
        Key => "KEY", reserved;
        Keys => "KEYS", reserved;
        Kill => "KILL", reserved;
        Lag => "LAG", reserved;
        Language => "LANGUAGE";
        Last => "LAST";
        LastValue => "LAST_VALUE", reserved;
        Lateral => "LATERAL", reserved;
        Lead => "LEAD", reserved;
        Left => "LEFT", reserved;
        Like => "LIKE", reserved;
        Limit => "LIMIT", reserved;
        Lines => "LINES", reserved;
        Linestring => "LINESTRING";
        Load => "LOAD", reserved;
        Local => "LOCAL";
        Lock => "LOCK", reserved;
        Locked => "LOCKED";
        Logs => "LOGS";
        Longblob => "LONGBLOB", reserved;
        Longtext => "LONGTEXT", reserved;
        LowPriority => "LOW_PRIORITY", reserved;
        Master => "MASTER";
        MasterHost => "MASTER_HOST";
        MasterLogFile => "MASTER_LOG_FILE";
        MasterLogPos => "MASTER_LOG_POS";
        MasterPassword => "MASTER_PASSWORD";
        MasterPort => "MASTER_PORT";
        MasterUser => "MASTER_USER";
        Match => "MATCH", reserved;
        Max => "MAX";
        Medium => "MEDIUM";
        Mediumblob => "MEDIUMBLOB", reserved;
        Mediumint => "MEDIUMINT", reserved;
        Mediumtext => "MEDIUMTEXT", reserved;
        Member => "MEMBER";
        Merge => "MERGE";
        Microsecond => "MICROSECOND";
        Migrate => "MIGRATE";
        Min => "MIN";
        Minute => "MINUTE";
        MinuteMicrosecond => "MINUTE_MICROSECOND", reserved;
        MinuteSecond => "MINUTE_SECOND", reserved;
        Mod => "MOD", reserved;
        Mode => "MODE";
        Modify => "MODIFY";
        Month => "MONTH";
        Names => "NAMES";
        Natural => "NATURAL", reserved;
        Nchar => "NCHAR";
        Next => "NEXT";
        No => "NO";
        NoWriteToBinlog => "NO_WRITE_TO_BINLOG", reserved;
        Not => "NOT", reserved;
        Now => "NOW";
        Nowait => "NOWAIT";
        NthValue => "NTH_VALUE", reserved;
        Ntile => "NTILE", reserved;
        Null => "NULL", reserved;
        Numeric => "NUMERIC", reserved;
        Nvarchar => "NVARCHAR";
        Of => "OF", reserved;
        Offline => "OFFLINE";
        Offset => "OFFSET";
        On => "ON", reserved;
        One => "ONE";
        Online => "ONLINE";
        Only => "ONLY";
        Open => "OPEN";
        Optimize => "OPTIMIZE", reserved;
        OptimizerCosts => "OPTIMIZER_COSTS";
        Option => "OPTION", reserved;
        Optionally => "OPTIONALLY", reserved;
        Or => "OR", reserved;
        Order => "ORDER", reserved;
        Outer => "OUTER", reserved;
        Outfile => "OUTFILE", reserved;
        Over => "OVER", reserved;
        Partition => "PARTITION", reserved;
        Partitions => "PARTITIONS";
        Password => "PASSWORD";
        PercentRank => "PERCENT_RANK", reserved;
        Persist => "PERSIST";
        PersistOnly => "PERSIST_ONLY";
        Phase => "PHASE";
        Plugin => "PLUGIN";
        Plugins => "PLUGINS";
        Point => "POINT";
        Polygon => "POLYGON";
        Preceding => "PRECEDING";
        Precision => "PRECISION", reserved;
        Prepare => "PREPARE";
        Prev => "PREV";
        Primary => "PRIMARY", reserved;
        Privileges => "PRIVILEGES";
        Process => "PROCESS";
        Processlist => "PROCESSLIST";
        Purge => "PURGE", reserved;
        Quarter => "QUARTER";
        Query => "QUERY";
        Quick => "QUICK";
        Range => "RANGE", reserved;
        Rank => "RANK", reserved;
        Read => "READ", reserved;
        Real => "REAL", reserved;
        Recover => "RECOVER";
        Recursive => "RECURSIVE", reserved;
        Redundant => "REDUNDANT";
        References => "REFERENCES", reserved;
        Regexp => "REGEXP", reserved;
        Relay => "RELAY";
        Release => "RELEASE", reserved;
        Reload => "RELOAD";
        Rename => "RENAME", reserved;
        Repair => "REPAIR";
        Repeat => "REPEAT", reserved;
        Replace => "REPLACE", reserved;
        ReplicateDoDb => "REPLICATE_DO_DB";
        ReplicateDoTable => "REPLICATE_DO_TABLE";
        ReplicateIgnoreDb => "REPLICATE_IGNORE_DB";
        ReplicateIgnoreTable => "REPLICATE_IGNORE_TABLE";
        ReplicateWildDoTable => "REPLICATE_WILD_DO_TABLE";
        ReplicateWildIgnoreTable => "REPLICATE_WILD_IGNORE_TABLE";
        Replication => "REPLICATION";
        Reset => "RESET";
        Restrict => "RESTRICT", reserved;
        Resume => "RESUME";
        Revoke => "REVOKE", reserved;
        Right => "RIGHT", reserved;
        Rollback => "ROLLBACK";
        Rollup => "ROLLUP";
        Routine => "ROUTINE";
        Row => "ROW", reserved;
        RowFormat => "ROW_FORMAT";
        RowNumber => "ROW_NUMBER", reserved;
        Rows => "ROWS", reserved;
        Savepoint => "SAVEPOINT";
        Second => "SECOND";
        SecondMicrosecond => "SECOND_MICROSECOND", reserved;
        Select => "SELECT", reserved;
        Separator => "SEPARATOR";
        Serial => "SERIAL";
        Session => "SESSION";
        Set => "SET", reserved;
        Share => "SHARE";
        Show => "SHOW", reserved;
        Shutdown => "SHUTDOWN";
        Signed => "SIGNED";
        Skip => "SKIP";
        Slave => "SLAVE";
        Slow => "SLOW";
        Smallint => "SMALLINT", reserved;
        Snapshot => "SNAPSHOT";
        Soname => "SONAME";
        Sounds => "SOUNDS";
        Spatial => "SPATIAL", reserved;
        SqlBigResult => "SQL_BIG_RESULT", reserved;
        SqlBufferResult => "SQL_BUFFER_RESULT";
        SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS", reserved;
        SqlNoCache => "SQL_NO_CACHE";
        SqlSmallResult => "SQL_SMALL_RESULT", reserved;
        Start => "START";
        Starting => "STARTING", reserved;
        Status => "STATUS";
        Std => "STD";
        StddevSamp => "STDDEV_SAMP";
        Stop => "STOP";
        Storage => "STORAGE";
        StraightJoin => "STRAIGHT_JOIN", reserved;
        Subdate => "SUBDATE";
        Substring => "SUBSTRING";
        Sum => "SUM";
        Suspend => "SUSPEND";
        Sysdate => "SYSDATE";
        System => "SYSTEM";
        Table => "TABLE", reserved;
        Tables => "TABLES";
        Temporary => "TEMPORARY";
        Temptable => "TEMPTABLE";
        Terminated => "TERMINATED", reserved;
        Text => "TEXT";
        Then => "THEN", reserved;
        Time => "TIME";
        Timestamp => "TIMESTAMP";
        Tinyblob => "TINYBLOB", reserved;
        Tinyint => "TINYINT", reserved;
        Tinytext => "TINYTEXT", reserved;
        To => "TO", reserved;
        Transaction => "TRANSACTION";
        Trigger => "TRIGGER";
        Triggers => "TRIGGERS";
        Trim => "TRIM";
        True => "TRUE", reserved;
        Truncate => "TRUNCATE";
        Unbounded => "UNBOUNDED";
        Undefined => "UNDEFINED";
        Unicode => "UNICODE";
        Uninstall => "UNINSTALL";
        Union => "UNION", reserved;
        Unique => "UNIQUE", reserved;
        Unknown => "UNKNOWN";
        Unlock => "UNLOCK", reserved;
        Unsigned => "UNSIGNED", reserved;
        Update => "UPDATE", reserved;
        Upgrade => "UPGRADE";
        Usage => "USAGE", reserved;
        Use => "USE", reserved;
        UseFrm => "USE_FRM";
        User => "USER";
        UserResources => "USER_RESOURCES";
        Using => "USING", reserved;
        UtcDate => "UTC_DATE", reserved;
        UtcTime => "UTC_TIME", reserved;
        UtcTimestamp => "UTC_TIMESTAMP", reserved;
        Value => "VALUE";
        Values => "VALUES", reserved;
        VarSamp => "VAR_SAMP";
        Varbinary => "VARBINARY", reserved;
        Varchar => "VARCHAR", reserved;
        Variables => "VARIABLES";
        Variance => "VARIANCE";
        View => "VIEW";
        Visible => "VISIBLE";
        Warnings => "WARNINGS";
        Week => "WEEK";
        WeightString => "WEIGHT_STRING";
        When => "WHEN", reserved;
        Where => "WHERE", reserved;
        Window => "WINDOW", reserved;
        With => "WITH", reserved;
        Work => "WORK";
        Write => "WRITE", reserved;
        Xa => "XA";
        Xor => "XOR", reserved;
        Year => "YEAR";
        YearMonth => "YEAR_MONTH", reserved;
        Zerofill => "ZEROFILL", reserved;
    }
}

/// Alternate spellings the lexer folds into a single terminal.
const SYNONYMS: &[(TokenKind, &[&str])] = &[
    (TokenKind::Char, &["CHARACTER"]),
    (TokenKind::Decimal, &["DEC"]),
    (TokenKind::Distinct, &["DISTINCTROW"]),
    (TokenKind::Columns, &["FIELDS"]),
    (TokenKind::Int, &["INTEGER", "INT4"]),
    (TokenKind::Regexp, &["RLIKE"]),
    (TokenKind::Database, &["SCHEMA"]),
    (TokenKind::Databases, &["SCHEMAS"]),
    (TokenKind::Bigint, &["INT8"]),
    (TokenKind::Tinyint, &["INT1"]),
    (TokenKind::Smallint, &["INT2"]),
    (TokenKind::Mediumint, &["INT3", "MIDDLEINT"]),
    (TokenKind::Varchar, &["VARCHARACTER"]),
    (TokenKind::Double, &["FLOAT8"]),
    (TokenKind::Float, &["FLOAT4"]),
    (TokenKind::Substring, &["SUBSTR"]),
    (TokenKind::Std, &["STDDEV", "STDDEV_POP"]),
    (TokenKind::Variance, &["VAR_POP"]),
];

impl TokenKind {
    /// Looks up a keyword by its (case-insensitive) spelling, synonyms included.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let upper = text.to_ascii_uppercase();
        Self::from_primary_text(&upper).or_else(|| {
            SYNONYMS
                .iter()
                .find(|(_, spellings)| spellings.contains(&upper.as_str()))
                .map(|(kind, _)| *kind)
        })
    }

    /// Alternate spellings of this terminal, empty for most tokens.
    pub fn synonyms(self) -> &'static [&'static str] {
        SYNONYMS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, spellings)| *spellings)
            .unwrap_or(&[])
    }

    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// True for terminals accepted where the grammar expects an identifier.
    pub fn is_identifier_like(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::BackTickQuotedId)
            || (self.is_keyword() && !self.is_reserved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_follow_lexer_conventions() {
        assert_eq!(TokenKind::Select.display_name(), "SELECT_SYMBOL");
        assert_eq!(TokenKind::SqlCalcFoundRows.display_name(), "SQL_CALC_FOUND_ROWS_SYMBOL");
        assert_eq!(TokenKind::OpenPar.display_name(), "'('");
        assert_eq!(TokenKind::Identifier.display_name(), "IDENTIFIER");
        assert_eq!(TokenKind::Not2.display_name(), "NOT2_SYMBOL");
    }

    #[test]
    fn keyword_lookup_is_case_insensitive_and_folds_synonyms() {
        assert_eq!(TokenKind::from_keyword("select"), Some(TokenKind::Select));
        assert_eq!(TokenKind::from_keyword("Schema"), Some(TokenKind::Database));
        assert_eq!(TokenKind::from_keyword("integer"), Some(TokenKind::Int));
        assert_eq!(TokenKind::from_keyword("users"), None);
        assert_eq!(TokenKind::from_keyword("NOT2"), None);
    }

    #[test]
    fn reserved_words_are_not_identifiers() {
        assert!(TokenKind::From.is_reserved());
        assert!(!TokenKind::From.is_identifier_like());
        assert!(TokenKind::Status.is_identifier_like());
        assert!(TokenKind::BackTickQuotedId.is_identifier_like());
        assert!(!TokenKind::Comma.is_identifier_like());
    }

    #[test]
    fn synonyms_are_listed_per_token() {
        assert_eq!(TokenKind::Int.synonyms(), &["INTEGER", "INT4"]);
        assert!(TokenKind::Select.synonyms().is_empty());
    }

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for kind in TokenKind::KEYWORDS {
            let text = kind.keyword_text().unwrap();
            assert_eq!(TokenKind::from_keyword(text), Some(*kind), "{text}");
        }
    }
}
