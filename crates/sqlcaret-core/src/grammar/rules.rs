use std::fmt;

macro_rules! define_rules {
    ($($variant:ident => $name:literal,)*) => {
        /// Identifier of a grammar rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleKind {
            $($variant,)*
        }

        impl RuleKind {
            /// Rule name as written in the grammar (`tableRef`).
            pub fn name(self) -> &'static str {
                match self {
                    $(RuleKind::$variant => $name,)*
                }
            }
        }
    };
}

define_rules! {
    AccountManagementStatement => "accountManagementStatement",
    AlterDatabase => "alterDatabase",
    AlterListItem => "alterListItem",
    AlterStatement => "alterStatement",
    AlterTable => "alterTable",
    AlterTableActions => "alterTableActions",
    AlterView => "alterView",
    BeginWork => "beginWork",
    BitExpr => "bitExpr",
    BoolPri => "boolPri",
    BoolTerm => "boolTerm",
    CallStatement => "callStatement",
    CastType => "castType",
    ChangeMaster => "changeMaster",
    ChangeReplication => "changeReplication",
    Charset => "charset",
    CharsetClause => "charsetClause",
    CharsetName => "charsetName",
    CharsetWithOptBinary => "charsetWithOptBinary",
    CheckConstraint => "checkConstraint",
    ColumnAttribute => "columnAttribute",
    ColumnDefinition => "columnDefinition",
    ColumnInternalRef => "columnInternalRef",
    ColumnRef => "columnRef",
    CommonTableExpression => "commonTableExpression",
    CompOp => "compOp",
    ConstraintName => "constraintName",
    CreateDatabase => "createDatabase",
    CreateDatabaseOption => "createDatabaseOption",
    CreateIndex => "createIndex",
    CreateStatement => "createStatement",
    CreateTable => "createTable",
    CreateTableOption => "createTableOption",
    CreateTableOptions => "createTableOptions",
    CreateView => "createView",
    DataType => "dataType",
    DeleteOption => "deleteOption",
    DeleteStatement => "deleteStatement",
    DerivedTable => "derivedTable",
    DescribeStatement => "describeStatement",
    Direction => "direction",
    DoStatement => "doStatement",
    DropStatement => "dropStatement",
    ElseExpression => "elseExpression",
    ExplainStatement => "explainStatement",
    Expr => "expr",
    ExprList => "exprList",
    FieldDefinition => "fieldDefinition",
    FieldLength => "fieldLength",
    FieldOptions => "fieldOptions",
    Fields => "fields",
    FieldsClause => "fieldsClause",
    FilterDefinition => "filterDefinition",
    FilterTableRef => "filterTableRef",
    FloatOptions => "floatOptions",
    FlushOption => "flushOption",
    FromClause => "fromClause",
    FulltextOptions => "fulltextOptions",
    FunctionCall => "functionCall",
    GrantIdentifier => "grantIdentifier",
    GroupByClause => "groupByClause",
    HandlerReadOrScan => "handlerReadOrScan",
    HandlerStatement => "handlerStatement",
    HavingClause => "havingClause",
    HelpCommand => "helpCommand",
    IdentifierListWithParentheses => "identifierListWithParentheses",
    IfExists => "ifExists",
    IfNotExists => "ifNotExists",
    InDb => "inDb",
    IndexHint => "indexHint",
    IndexHintClause => "indexHintClause",
    IndexHintList => "indexHintList",
    IndexList => "indexList",
    IndexOption => "indexOption",
    IndexOrKey => "indexOrKey",
    InnerJoinType => "innerJoinType",
    InsertFromConstructor => "insertFromConstructor",
    InsertIdentifier => "insertIdentifier",
    InsertQueryExpression => "insertQueryExpression",
    InsertStatement => "insertStatement",
    InsertUpdateList => "insertUpdateList",
    InsertValues => "insertValues",
    InstallUninstallStatement => "installUninstallStatement",
    Interval => "interval",
    IntoClause => "intoClause",
    JoinCondition => "joinCondition",
    JoinedTable => "joinedTable",
    KeyList => "keyList",
    LikeOrWhere => "likeOrWhere",
    LimitClause => "limitClause",
    LimitOption => "limitOption",
    LimitOptions => "limitOptions",
    LinesClause => "linesClause",
    Literal => "literal",
    LoadStatement => "loadStatement",
    LockItem => "lockItem",
    LockStatement => "lockStatement",
    LockingClause => "lockingClause",
    MasterOption => "masterOption",
    NaturalJoinType => "naturalJoinType",
    NoWriteToBinLog => "noWriteToBinLog",
    Not2Rule => "not2Rule",
    NotRule => "notRule",
    NumLiteral => "numLiteral",
    OlapOption => "olapOption",
    OptionValue => "optionValue",
    OrderClause => "orderClause",
    OrderExpression => "orderExpression",
    OrderList => "orderList",
    OtherAdministrativeStatement => "otherAdministrativeStatement",
    OuterJoinType => "outerJoinType",
    Place => "place",
    Precision => "precision",
    Predicate => "predicate",
    PredicateOperations => "predicateOperations",
    PreparedStatement => "preparedStatement",
    PrivilegeList => "privilegeList",
    PrivilegeType => "privilegeType",
    ProcedureRef => "procedureRef",
    Query => "query",
    QueryExpression => "queryExpression",
    QueryExpressionBody => "queryExpressionBody",
    QueryPrimary => "queryPrimary",
    QuerySpecification => "querySpecification",
    ReferencesClause => "referencesClause",
    RenameTableStatement => "renameTableStatement",
    ReplaceStatement => "replaceStatement",
    ReplicationStatement => "replicationStatement",
    RuntimeFunctionCall => "runtimeFunctionCall",
    SavepointStatement => "savepointStatement",
    SchemaRef => "schemaRef",
    SelectAlias => "selectAlias",
    SelectItem => "selectItem",
    SelectItemList => "selectItemList",
    SelectOption => "selectOption",
    SelectStatement => "selectStatement",
    SetStatement => "setStatement",
    ShowStatement => "showStatement",
    SignedLiteral => "signedLiteral",
    SimpleExpr => "simpleExpr",
    SimpleExprWithParentheses => "simpleExprWithParentheses",
    SimpleLimitClause => "simpleLimitClause",
    SimpleStatement => "simpleStatement",
    SingleTable => "singleTable",
    StringList => "stringList",
    Subquery => "subquery",
    SumExpr => "sumExpr",
    TableAdministrationStatement => "tableAdministrationStatement",
    TableAlias => "tableAlias",
    TableAliasRefList => "tableAliasRefList",
    TableConstraintDef => "tableConstraintDef",
    TableElement => "tableElement",
    TableElementList => "tableElementList",
    TableFactor => "tableFactor",
    TableName => "tableName",
    TableRef => "tableRef",
    TableRefList => "tableRefList",
    TableReference => "tableReference",
    TableReferenceList => "tableReferenceList",
    TableWild => "tableWild",
    TemporalLiteral => "temporalLiteral",
    TextLiteral => "textLiteral",
    TextString => "textString",
    TextStringLiteral => "textStringLiteral",
    ThenExpression => "thenExpression",
    TransactionCharacteristic => "transactionCharacteristic",
    TransactionOrLockingStatement => "transactionOrLockingStatement",
    TransactionStatement => "transactionStatement",
    TruncateTableStatement => "truncateTableStatement",
    TypeDatetimePrecision => "typeDatetimePrecision",
    UpdateElement => "updateElement",
    UpdateList => "updateList",
    UpdateStatement => "updateStatement",
    UseCommand => "useCommand",
    UsePartition => "usePartition",
    User => "user",
    UserList => "userList",
    UtilityStatement => "utilityStatement",
    ValueList => "valueList",
    Values => "values",
    ViewAlgorithm => "viewAlgorithm",
    ViewCheckOption => "viewCheckOption",
    ViewRef => "viewRef",
    WhenExpression => "whenExpression",
    WhereClause => "whereClause",
    WindowClause => "windowClause",
    WindowDefinition => "windowDefinition",
    WindowFrameBound => "windowFrameBound",
    WindowFrameClause => "windowFrameClause",
    WindowFunctionCall => "windowFunctionCall",
    WindowSpec => "windowSpec",
    WindowingClause => "windowingClause",
    WithClause => "withClause",
    XaStatement => "xaStatement",
    Xid => "xid",
}

impl RuleKind {
    /// Rules reported as a whole instead of being expanded into their terminals.
    pub const PREFERRED: &'static [RuleKind] = &[
        RuleKind::TableRef,
        RuleKind::FilterTableRef,
        RuleKind::TableWild,
        RuleKind::ColumnRef,
        RuleKind::ColumnInternalRef,
    ];

    pub fn is_preferred(self) -> bool {
        Self::PREFERRED.contains(&self)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
