//! MySQL statement grammar.
//!
//! Rule names follow the MySQL Workbench grammar so candidate stacks read the same
//! way. Only the parts relevant for completion are modelled: statement shapes,
//! clause keywords and the places where tables and columns are referenced.
//! Expression precedence is flattened since only recognition matters here.

use std::sync::OnceLock;

use super::{alt, ident, many, opt, rule, separated, seq, since, some, tok, until};
use super::{Grammar, RuleKind, TokenKind};

macro_rules! k {
    ($name:ident) => {
        tok(TokenKind::$name)
    };
}

macro_rules! r {
    ($name:ident) => {
        rule(RuleKind::$name)
    };
}

/// Choice between plain terminals.
macro_rules! any {
    ($($name:ident),+ $(,)?) => {
        alt![$(tok(TokenKind::$name)),+]
    };
}

/// Returns the shared MySQL grammar, built on first use.
pub fn mysql_grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(build)
}

fn build() -> Grammar {
    let mut g = Grammar::new(RuleKind::Query);
    statements(&mut g);
    select(&mut g);
    table_references(&mut g);
    expressions(&mut g);
    functions(&mut g);
    data_manipulation(&mut g);
    data_definition(&mut g);
    transactions(&mut g);
    replication(&mut g);
    administration(&mut g);
    utility(&mut g);
    references(&mut g);
    literals(&mut g);
    g
}

fn statements(g: &mut Grammar) {
    g.define(
        RuleKind::Query,
        alt![
            k!(Eof),
            seq![
                alt![r!(SimpleStatement), r!(BeginWork)],
                alt![seq![k!(Semicolon), opt(k!(Eof))], k!(Eof)],
            ],
        ],
    );
    g.define(
        RuleKind::SimpleStatement,
        alt![
            // DDL
            r!(AlterStatement),
            r!(CreateStatement),
            r!(DropStatement),
            r!(RenameTableStatement),
            r!(TruncateTableStatement),
            // DML
            r!(CallStatement),
            r!(DeleteStatement),
            r!(DoStatement),
            r!(HandlerStatement),
            r!(InsertStatement),
            r!(LoadStatement),
            r!(ReplaceStatement),
            r!(SelectStatement),
            r!(UpdateStatement),
            r!(TransactionOrLockingStatement),
            r!(ReplicationStatement),
            r!(PreparedStatement),
            // Data Directory
            r!(AccountManagementStatement),
            r!(TableAdministrationStatement),
            r!(InstallUninstallStatement),
            r!(SetStatement),
            r!(ShowStatement),
            r!(OtherAdministrativeStatement),
            r!(UtilityStatement),
        ],
    );
}

fn select(g: &mut Grammar) {
    g.define(
        RuleKind::SelectStatement,
        seq![r!(QueryExpression), many(r!(LockingClause))],
    );
    g.define(
        RuleKind::QueryExpression,
        seq![
            opt(since(8, 0, 0, r!(WithClause))),
            r!(QueryExpressionBody),
            opt(r!(OrderClause)),
            opt(r!(LimitClause)),
        ],
    );
    g.define(
        RuleKind::QueryExpressionBody,
        seq![
            r!(QueryPrimary),
            many(seq![
                alt![k!(Union), since(8, 0, 31, any![Except, Intersect])],
                opt(any![Distinct, All]),
                r!(QueryPrimary),
            ]),
        ],
    );
    g.define(
        RuleKind::QueryPrimary,
        alt![
            r!(QuerySpecification),
            seq![k!(OpenPar), r!(QueryExpression), k!(ClosePar)],
            since(8, 0, 19, seq![k!(Table), r!(TableRef)]),
        ],
    );
    g.define(
        RuleKind::QuerySpecification,
        seq![
            k!(Select),
            many(r!(SelectOption)),
            r!(SelectItemList),
            opt(r!(IntoClause)),
            opt(r!(FromClause)),
            opt(r!(WhereClause)),
            opt(r!(GroupByClause)),
            opt(r!(HavingClause)),
            opt(since(8, 0, 0, r!(WindowClause))),
        ],
    );
    g.define(
        RuleKind::SelectOption,
        any![
            Distinct,
            All,
            HighPriority,
            StraightJoin,
            SqlSmallResult,
            SqlBigResult,
            SqlBufferResult,
            SqlCalcFoundRows,
            SqlNoCache,
        ],
    );
    g.define(
        RuleKind::SelectItemList,
        seq![
            alt![r!(SelectItem), k!(Mult)],
            many(seq![k!(Comma), r!(SelectItem)]),
        ],
    );
    g.define(
        RuleKind::SelectItem,
        alt![r!(TableWild), seq![r!(Expr), opt(r!(SelectAlias))]],
    );
    g.define(
        RuleKind::SelectAlias,
        seq![opt(k!(As)), alt![ident(), r!(TextStringLiteral)]],
    );
    g.define(
        RuleKind::WithClause,
        seq![
            k!(With),
            opt(k!(Recursive)),
            separated(r!(CommonTableExpression), TokenKind::Comma),
        ],
    );
    g.define(
        RuleKind::CommonTableExpression,
        seq![
            ident(),
            opt(r!(IdentifierListWithParentheses)),
            k!(As),
            r!(Subquery),
        ],
    );
    g.define(
        RuleKind::Subquery,
        seq![k!(OpenPar), r!(QueryExpression), k!(ClosePar)],
    );
    g.define(
        RuleKind::IntoClause,
        seq![
            k!(Into),
            alt![
                seq![k!(Outfile), r!(TextStringLiteral)],
                seq![k!(Dumpfile), r!(TextStringLiteral)],
                separated(ident(), TokenKind::Comma),
            ],
        ],
    );
    g.define(
        RuleKind::WhereClause,
        seq![k!(Where), r!(Expr)],
    );
    g.define(
        RuleKind::GroupByClause,
        seq![k!(Group), k!(By), r!(OrderList), opt(r!(OlapOption))],
    );
    g.define(RuleKind::OlapOption, seq![k!(With), k!(Rollup)]);
    g.define(RuleKind::HavingClause, seq![k!(Having), r!(Expr)]);
    g.define(
        RuleKind::WindowClause,
        seq![k!(Window), separated(r!(WindowDefinition), TokenKind::Comma)],
    );
    g.define(
        RuleKind::WindowDefinition,
        seq![ident(), k!(As), r!(WindowSpec)],
    );
    g.define(
        RuleKind::WindowSpec,
        seq![
            k!(OpenPar),
            opt(ident()),
            opt(seq![k!(Partition), k!(By), r!(OrderList)]),
            opt(r!(OrderClause)),
            opt(r!(WindowFrameClause)),
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::WindowFrameClause,
        seq![
            any![Rows, Range],
            alt![
                r!(WindowFrameBound),
                seq![
                    k!(Between),
                    r!(WindowFrameBound),
                    k!(And),
                    r!(WindowFrameBound),
                ],
            ],
        ],
    );
    g.define(
        RuleKind::WindowFrameBound,
        alt![
            seq![k!(Unbounded), any![Preceding, Following]],
            seq![k!(Current), k!(Row)],
            seq![r!(Expr), any![Preceding, Following]],
        ],
    );
    g.define(
        RuleKind::OrderClause,
        seq![k!(Order), k!(By), r!(OrderList)],
    );
    g.define(
        RuleKind::OrderList,
        separated(r!(OrderExpression), TokenKind::Comma),
    );
    g.define(
        RuleKind::OrderExpression,
        seq![r!(Expr), opt(r!(Direction))],
    );
    g.define(RuleKind::Direction, any![Asc, Desc]);
    g.define(
        RuleKind::LimitClause,
        seq![k!(Limit), r!(LimitOptions)],
    );
    g.define(
        RuleKind::SimpleLimitClause,
        seq![k!(Limit), r!(LimitOption)],
    );
    g.define(
        RuleKind::LimitOptions,
        seq![
            r!(LimitOption),
            opt(seq![alt![k!(Comma), k!(Offset)], r!(LimitOption)]),
        ],
    );
    g.define(
        RuleKind::LimitOption,
        alt![ident(), k!(ParamMarker), k!(IntNumber)],
    );
    g.define(
        RuleKind::LockingClause,
        alt![
            seq![
                k!(For),
                alt![k!(Update), since(8, 0, 1, k!(Share))],
                opt(since(
                    8,
                    0,
                    1,
                    seq![k!(Of), separated(r!(TableRef), TokenKind::Comma)],
                )),
                opt(since(8, 0, 1, alt![seq![k!(Skip), k!(Locked)], k!(Nowait)])),
            ],
            seq![k!(Lock), k!(In), k!(Share), k!(Mode)],
        ],
    );
}

fn table_references(g: &mut Grammar) {
    g.define(
        RuleKind::FromClause,
        seq![k!(From), alt![k!(Dual), r!(TableReferenceList)]],
    );
    g.define(
        RuleKind::TableReferenceList,
        separated(r!(TableReference), TokenKind::Comma),
    );
    g.define(
        RuleKind::TableReference,
        seq![r!(TableFactor), many(r!(JoinedTable))],
    );
    g.define(
        RuleKind::JoinedTable,
        alt![
            seq![
                r!(InnerJoinType),
                r!(TableFactor),
                opt(r!(JoinCondition)),
            ],
            seq![r!(OuterJoinType), r!(TableFactor), r!(JoinCondition)],
            seq![r!(NaturalJoinType), r!(TableFactor)],
        ],
    );
    g.define(
        RuleKind::JoinCondition,
        alt![
            seq![k!(On), r!(Expr)],
            seq![k!(Using), r!(IdentifierListWithParentheses)],
        ],
    );
    g.define(
        RuleKind::InnerJoinType,
        alt![
            seq![opt(any![Inner, Cross]), k!(Join)],
            k!(StraightJoin),
        ],
    );
    g.define(
        RuleKind::OuterJoinType,
        seq![any![Left, Right], opt(k!(Outer)), k!(Join)],
    );
    g.define(
        RuleKind::NaturalJoinType,
        alt![
            seq![k!(Natural), opt(k!(Inner)), k!(Join)],
            seq![k!(Natural), any![Left, Right], opt(k!(Outer)), k!(Join)],
        ],
    );
    g.define(
        RuleKind::TableFactor,
        alt![
            r!(SingleTable),
            r!(DerivedTable),
            seq![k!(OpenPar), r!(TableReferenceList), k!(ClosePar)],
        ],
    );
    g.define(
        RuleKind::SingleTable,
        seq![
            r!(TableRef),
            opt(r!(UsePartition)),
            opt(r!(TableAlias)),
            opt(r!(IndexHintList)),
        ],
    );
    g.define(
        RuleKind::DerivedTable,
        alt![
            seq![
                r!(Subquery),
                opt(r!(TableAlias)),
                opt(r!(IdentifierListWithParentheses)),
            ],
            since(
                8,
                0,
                14,
                seq![
                    k!(Lateral),
                    r!(Subquery),
                    opt(r!(TableAlias)),
                    opt(r!(IdentifierListWithParentheses)),
                ],
            ),
        ],
    );
    g.define(
        RuleKind::TableAlias,
        seq![opt(any![As, Equal]), ident()],
    );
    g.define(
        RuleKind::UsePartition,
        seq![k!(Partition), r!(IdentifierListWithParentheses)],
    );
    g.define(
        RuleKind::IndexHintList,
        seq![r!(IndexHint), many(seq![opt(k!(Comma)), r!(IndexHint)])],
    );
    g.define(
        RuleKind::IndexHint,
        alt![
            seq![
                any![Force, Ignore],
                r!(IndexOrKey),
                opt(r!(IndexHintClause)),
                k!(OpenPar),
                r!(IndexList),
                k!(ClosePar),
            ],
            seq![
                k!(Use),
                r!(IndexOrKey),
                opt(r!(IndexHintClause)),
                k!(OpenPar),
                opt(r!(IndexList)),
                k!(ClosePar),
            ],
        ],
    );
    g.define(RuleKind::IndexOrKey, any![Index, Key]);
    g.define(
        RuleKind::IndexHintClause,
        seq![
            k!(For),
            alt![
                k!(Join),
                seq![k!(Order), k!(By)],
                seq![k!(Group), k!(By)],
            ],
        ],
    );
    g.define(
        RuleKind::IndexList,
        separated(alt![ident(), k!(Primary)], TokenKind::Comma),
    );
}

fn expressions(g: &mut Grammar) {
    g.define(
        RuleKind::Expr,
        seq![
            r!(BoolTerm),
            many(seq![
                any![And, LogicalAnd, Xor, Or, LogicalOr],
                r!(BoolTerm),
            ]),
        ],
    );
    g.define(
        RuleKind::BoolTerm,
        alt![
            seq![k!(Not), r!(BoolTerm)],
            seq![
                r!(BoolPri),
                opt(seq![
                    k!(Is),
                    opt(r!(NotRule)),
                    any![True, False, Unknown],
                ]),
            ],
        ],
    );
    g.define(
        RuleKind::BoolPri,
        seq![
            r!(Predicate),
            many(alt![
                seq![k!(Is), opt(r!(NotRule)), k!(Null)],
                seq![
                    r!(CompOp),
                    alt![r!(Predicate), seq![any![All, Any], r!(Subquery)]],
                ],
            ]),
        ],
    );
    g.define(
        RuleKind::CompOp,
        any![
            Equal,
            NullSafeEqual,
            GreaterOrEqual,
            Greater,
            LessOrEqual,
            Less,
            NotEqual,
        ],
    );
    g.define(
        RuleKind::Predicate,
        seq![
            r!(BitExpr),
            opt(alt![
                seq![opt(r!(NotRule)), r!(PredicateOperations)],
                since(
                    8,
                    0,
                    17,
                    seq![k!(Member), opt(k!(Of)), r!(SimpleExprWithParentheses)],
                ),
                seq![k!(Sounds), k!(Like), r!(BitExpr)],
            ]),
        ],
    );
    g.define(
        RuleKind::PredicateOperations,
        alt![
            seq![
                k!(In),
                alt![
                    r!(Subquery),
                    seq![k!(OpenPar), r!(ExprList), k!(ClosePar)],
                ],
            ],
            seq![k!(Between), r!(BitExpr), k!(And), r!(Predicate)],
            seq![
                k!(Like),
                r!(SimpleExpr),
                opt(seq![k!(Escape), r!(SimpleExpr)]),
            ],
            seq![k!(Regexp), r!(BitExpr)],
        ],
    );
    g.define(
        RuleKind::BitExpr,
        seq![
            r!(SimpleExpr),
            many(alt![
                seq![
                    any![
                        BitwiseOr,
                        BitwiseAnd,
                        ShiftLeft,
                        ShiftRight,
                        Plus,
                        Minus,
                        Mult,
                        Divide,
                        Modulo,
                        Div,
                        Mod,
                        BitwiseXor,
                        ConcatPipes,
                    ],
                    r!(SimpleExpr),
                ],
                seq![any![Plus, Minus], k!(Interval), r!(Expr), r!(Interval)],
            ]),
        ],
    );
    g.define(
        RuleKind::SimpleExpr,
        seq![
            alt![
                r!(ColumnRef),
                r!(RuntimeFunctionCall),
                r!(FunctionCall),
                r!(Literal),
                k!(ParamMarker),
                r!(SumExpr),
                since(8, 0, 0, r!(WindowFunctionCall)),
                seq![any![Plus, Minus, BitwiseNot], r!(SimpleExpr)],
                seq![r!(Not2Rule), r!(SimpleExpr)],
                seq![opt(k!(Row)), k!(OpenPar), r!(ExprList), k!(ClosePar)],
                seq![opt(k!(Exists)), r!(Subquery)],
                seq![
                    k!(Match),
                    r!(IdentifierListWithParentheses),
                    k!(Against),
                    k!(OpenPar),
                    r!(BitExpr),
                    opt(r!(FulltextOptions)),
                    k!(ClosePar),
                ],
                seq![k!(Binary), r!(SimpleExpr)],
                seq![
                    k!(Cast),
                    k!(OpenPar),
                    r!(Expr),
                    k!(As),
                    r!(CastType),
                    k!(ClosePar),
                ],
                seq![
                    k!(Case),
                    opt(r!(Expr)),
                    some(seq![r!(WhenExpression), r!(ThenExpression)]),
                    opt(r!(ElseExpression)),
                    k!(End),
                ],
                seq![
                    k!(Convert),
                    k!(OpenPar),
                    r!(Expr),
                    alt![
                        seq![k!(Comma), r!(CastType)],
                        seq![k!(Using), r!(CharsetName)],
                    ],
                    k!(ClosePar),
                ],
                seq![k!(Default), k!(OpenPar), ident(), k!(ClosePar)],
                seq![k!(Values), k!(OpenPar), ident(), k!(ClosePar)],
                seq![k!(Interval), r!(Expr), r!(Interval), k!(Plus), r!(Expr)],
            ],
            opt(seq![k!(Collate), ident()]),
        ],
    );
    g.define(
        RuleKind::SimpleExprWithParentheses,
        seq![k!(OpenPar), r!(SimpleExpr), k!(ClosePar)],
    );
    g.define(
        RuleKind::FulltextOptions,
        alt![
            seq![
                k!(In),
                k!(Boolean),
                k!(Mode),
            ],
            seq![
                k!(In),
                k!(Natural),
                k!(Language),
                k!(Mode),
                opt(seq![k!(With), k!(Query), k!(Expansion)]),
            ],
            seq![k!(With), k!(Query), k!(Expansion)],
        ],
    );
    g.define(RuleKind::NotRule, any![Not, Not2]);
    g.define(RuleKind::Not2Rule, any![LogicalNot, Not2]);
    g.define(
        RuleKind::ExprList,
        separated(r!(Expr), TokenKind::Comma),
    );
    g.define(RuleKind::WhenExpression, seq![k!(When), r!(Expr)]);
    g.define(RuleKind::ThenExpression, seq![k!(Then), r!(Expr)]);
    g.define(RuleKind::ElseExpression, seq![k!(Else), r!(Expr)]);
    g.define(
        RuleKind::Interval,
        any![
            Microsecond,
            Second,
            Minute,
            Hour,
            Day,
            Week,
            Month,
            Quarter,
            Year,
            SecondMicrosecond,
            MinuteMicrosecond,
            MinuteSecond,
            HourMicrosecond,
            HourSecond,
            HourMinute,
            DayMicrosecond,
            DaySecond,
            DayMinute,
            DayHour,
            YearMonth,
        ],
    );
    g.define(
        RuleKind::CastType,
        alt![
            seq![k!(Binary), opt(r!(FieldLength))],
            seq![k!(Char), opt(r!(FieldLength)), opt(r!(CharsetWithOptBinary))],
            seq![k!(Nchar), opt(r!(FieldLength))],
            seq![k!(Signed), opt(k!(Int))],
            seq![k!(Unsigned), opt(k!(Int))],
            k!(Date),
            seq![k!(Time), opt(r!(TypeDatetimePrecision))],
            seq![k!(Datetime), opt(r!(TypeDatetimePrecision))],
            seq![k!(Decimal), opt(r!(FloatOptions))],
            since(5, 7, 8, k!(Json)),
            since(8, 0, 17, k!(Real)),
            since(8, 0, 17, seq![k!(Double), opt(k!(Precision))]),
            since(8, 0, 17, seq![k!(Float), opt(r!(FieldLength))]),
        ],
    );
}

fn functions(g: &mut Grammar) {
    g.define(
        RuleKind::RuntimeFunctionCall,
        alt![
            // Keyword named functions taking an argument list.
            seq![
                any![
                    Char,
                    Date,
                    Day,
                    Hour,
                    Insert,
                    Interval,
                    Left,
                    Minute,
                    Month,
                    Right,
                    Second,
                    Time,
                    Timestamp,
                    Trim,
                    Year,
                    Adddate,
                    Subdate,
                    DateAdd,
                    DateSub,
                    Extract,
                    Substring,
                    Coalesce,
                    If,
                    Replace,
                    Repeat,
                    Mod,
                    Database,
                    Format,
                    Microsecond,
                    Password,
                    Quarter,
                    Week,
                    WeightString,
                ],
                k!(OpenPar),
                opt(r!(ExprList)),
                k!(ClosePar),
            ],
            seq![
                any![Curdate, Curtime, Now, Sysdate, UtcDate, UtcTime, UtcTimestamp, User],
                k!(OpenPar),
                opt(r!(ExprList)),
                k!(ClosePar),
            ],
            seq![
                any![CurrentUser, CurrentDate, CurrentTime, CurrentTimestamp],
                opt(seq![k!(OpenPar), k!(ClosePar)]),
            ],
        ],
    );
    g.define(
        RuleKind::FunctionCall,
        seq![
            ident(),
            opt(seq![k!(Dot), ident()]),
            k!(OpenPar),
            opt(r!(ExprList)),
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::SumExpr,
        alt![
            seq![
                k!(Count),
                k!(OpenPar),
                alt![
                    seq![opt(k!(All)), k!(Mult)],
                    seq![opt(any![All, Distinct]), r!(ExprList)],
                ],
                k!(ClosePar),
                opt(since(8, 0, 0, r!(WindowingClause))),
            ],
            seq![
                any![
                    Avg,
                    BitAnd,
                    BitOr,
                    BitXor,
                    Min,
                    Max,
                    Std,
                    Variance,
                    StddevSamp,
                    VarSamp,
                    Sum,
                ],
                k!(OpenPar),
                opt(any![All, Distinct]),
                r!(Expr),
                k!(ClosePar),
                opt(since(8, 0, 0, r!(WindowingClause))),
            ],
            seq![
                k!(GroupConcat),
                k!(OpenPar),
                opt(k!(Distinct)),
                r!(ExprList),
                opt(r!(OrderClause)),
                opt(seq![k!(Separator), r!(TextString)]),
                k!(ClosePar),
            ],
        ],
    );
    g.define(
        RuleKind::WindowFunctionCall,
        alt![
            seq![
                any![RowNumber, Rank, DenseRank, CumeDist, PercentRank],
                k!(OpenPar),
                k!(ClosePar),
                r!(WindowingClause),
            ],
            seq![
                any![Ntile, Lead, Lag, FirstValue, LastValue, NthValue],
                k!(OpenPar),
                r!(ExprList),
                k!(ClosePar),
                r!(WindowingClause),
            ],
        ],
    );
    g.define(
        RuleKind::WindowingClause,
        seq![k!(Over), alt![r!(WindowSpec), ident()]],
    );
}

fn data_manipulation(g: &mut Grammar) {
    g.define(
        RuleKind::CallStatement,
        seq![
            k!(Call),
            r!(ProcedureRef),
            opt(seq![k!(OpenPar), opt(r!(ExprList)), k!(ClosePar)]),
        ],
    );
    g.define(
        RuleKind::DeleteStatement,
        seq![
            opt(since(8, 0, 0, r!(WithClause))),
            k!(Delete),
            many(any![Quick, LowPriority, Ignore]),
            alt![
                seq![
                    k!(From),
                    alt![
                        seq![
                            r!(TableRef),
                            opt(r!(TableAlias)),
                            opt(r!(UsePartition)),
                            opt(r!(WhereClause)),
                            opt(r!(OrderClause)),
                            opt(r!(SimpleLimitClause)),
                        ],
                        seq![
                            r!(TableAliasRefList),
                            k!(Using),
                            r!(TableReferenceList),
                            opt(r!(WhereClause)),
                        ],
                    ],
                ],
                seq![
                    r!(TableAliasRefList),
                    k!(From),
                    r!(TableReferenceList),
                    opt(r!(WhereClause)),
                ],
            ],
        ],
    );
    g.define(
        RuleKind::TableAliasRefList,
        separated(
            seq![r!(TableRef), opt(seq![k!(Dot), k!(Mult)])],
            TokenKind::Comma,
        ),
    );
    g.define(
        RuleKind::DoStatement,
        seq![
            k!(Do),
            alt![
                until(5, 7, 9, r!(ExprList)),
                since(5, 7, 9, r!(SelectItemList)),
            ],
        ],
    );
    g.define(
        RuleKind::HandlerStatement,
        seq![
            k!(Handler),
            alt![
                seq![r!(TableRef), k!(Open), opt(r!(TableAlias))],
                seq![
                    ident(),
                    alt![
                        k!(Close),
                        seq![
                            k!(Read),
                            r!(HandlerReadOrScan),
                            opt(r!(WhereClause)),
                            opt(r!(LimitClause)),
                        ],
                    ],
                ],
            ],
        ],
    );
    g.define(
        RuleKind::HandlerReadOrScan,
        alt![
            any![First, Next],
            seq![
                ident(),
                alt![
                    any![First, Next, Prev, Last],
                    seq![
                        any![Equal, Less, Greater, LessOrEqual, GreaterOrEqual],
                        k!(OpenPar),
                        r!(Values),
                        k!(ClosePar),
                    ],
                ],
            ],
        ],
    );
    g.define(
        RuleKind::InsertStatement,
        seq![
            k!(Insert),
            opt(any![LowPriority, Delayed, HighPriority]),
            opt(k!(Ignore)),
            opt(k!(Into)),
            r!(TableRef),
            opt(r!(UsePartition)),
            alt![
                r!(InsertFromConstructor),
                seq![k!(Set), r!(UpdateList)],
                r!(InsertQueryExpression),
            ],
            opt(r!(InsertUpdateList)),
        ],
    );
    g.define(
        RuleKind::InsertFromConstructor,
        seq![
            opt(seq![k!(OpenPar), opt(r!(Fields)), k!(ClosePar)]),
            r!(InsertValues),
        ],
    );
    g.define(
        RuleKind::Fields,
        separated(r!(InsertIdentifier), TokenKind::Comma),
    );
    g.define(
        RuleKind::InsertIdentifier,
        alt![r!(ColumnRef), r!(TableWild)],
    );
    g.define(
        RuleKind::InsertValues,
        seq![any![Values, Value], r!(ValueList)],
    );
    g.define(
        RuleKind::ValueList,
        separated(
            seq![k!(OpenPar), opt(r!(Values)), k!(ClosePar)],
            TokenKind::Comma,
        ),
    );
    g.define(
        RuleKind::Values,
        separated(alt![r!(Expr), k!(Default)], TokenKind::Comma),
    );
    g.define(
        RuleKind::InsertQueryExpression,
        alt![
            r!(QueryExpression),
            seq![
                k!(OpenPar),
                opt(r!(Fields)),
                k!(ClosePar),
                r!(QueryExpression),
            ],
        ],
    );
    g.define(
        RuleKind::InsertUpdateList,
        seq![k!(On), k!(Duplicate), k!(Key), k!(Update), r!(UpdateList)],
    );
    g.define(
        RuleKind::LoadStatement,
        seq![
            k!(Load),
            k!(Data),
            opt(any![LowPriority, Concurrent]),
            opt(k!(Local)),
            k!(Infile),
            r!(TextLiteral),
            opt(any![Replace, Ignore]),
            k!(Into),
            k!(Table),
            r!(TableRef),
            opt(r!(UsePartition)),
            opt(r!(CharsetClause)),
            opt(r!(FieldsClause)),
            opt(r!(LinesClause)),
            opt(seq![k!(Ignore), k!(IntNumber), any![Lines, Rows]]),
            opt(seq![k!(OpenPar), opt(r!(Fields)), k!(ClosePar)]),
            opt(seq![k!(Set), r!(UpdateList)]),
        ],
    );
    g.define(
        RuleKind::FieldsClause,
        seq![
            k!(Columns),
            some(alt![
                seq![k!(Terminated), k!(By), r!(TextString)],
                seq![opt(k!(Optionally)), k!(Enclosed), k!(By), r!(TextString)],
                seq![k!(Escaped), k!(By), r!(TextString)],
            ]),
        ],
    );
    g.define(
        RuleKind::LinesClause,
        seq![
            k!(Lines),
            some(alt![
                seq![k!(Starting), k!(By), r!(TextString)],
                seq![k!(Terminated), k!(By), r!(TextString)],
            ]),
        ],
    );
    g.define(
        RuleKind::ReplaceStatement,
        seq![
            k!(Replace),
            opt(any![LowPriority, Delayed]),
            opt(k!(Into)),
            r!(TableRef),
            opt(r!(UsePartition)),
            alt![
                r!(InsertFromConstructor),
                seq![k!(Set), r!(UpdateList)],
                r!(InsertQueryExpression),
            ],
        ],
    );
    g.define(
        RuleKind::UpdateStatement,
        seq![
            opt(since(8, 0, 0, r!(WithClause))),
            k!(Update),
            opt(k!(LowPriority)),
            opt(k!(Ignore)),
            r!(TableReferenceList),
            k!(Set),
            r!(UpdateList),
            opt(r!(WhereClause)),
            opt(r!(OrderClause)),
            opt(r!(SimpleLimitClause)),
        ],
    );
    g.define(
        RuleKind::UpdateList,
        separated(r!(UpdateElement), TokenKind::Comma),
    );
    g.define(
        RuleKind::UpdateElement,
        seq![
            r!(ColumnRef),
            k!(Equal),
            alt![r!(Expr), k!(Default)],
        ],
    );
}

fn data_definition(g: &mut Grammar) {
    g.define(
        RuleKind::AlterStatement,
        seq![
            k!(Alter),
            alt![
                r!(AlterTable),
                r!(AlterDatabase),
                r!(AlterView),
            ],
        ],
    );
    g.define(
        RuleKind::AlterTable,
        seq![
            opt(any![Online, Offline]),
            opt(until(5, 7, 0, k!(Ignore))),
            k!(Table),
            r!(TableRef),
            opt(r!(AlterTableActions)),
        ],
    );
    g.define(
        RuleKind::AlterTableActions,
        separated(r!(AlterListItem), TokenKind::Comma),
    );
    g.define(
        RuleKind::AlterListItem,
        alt![
            seq![
                k!(Add),
                opt(k!(Column)),
                alt![
                    seq![
                        ident(),
                        r!(FieldDefinition),
                        opt(r!(ReferencesClause)),
                        opt(r!(Place)),
                    ],
                    seq![k!(OpenPar), r!(TableElementList), k!(ClosePar)],
                ],
            ],
            seq![k!(Add), r!(TableConstraintDef)],
            seq![
                k!(Change),
                opt(k!(Column)),
                r!(ColumnInternalRef),
                ident(),
                r!(FieldDefinition),
                opt(r!(Place)),
            ],
            seq![
                k!(Modify),
                opt(k!(Column)),
                r!(ColumnInternalRef),
                r!(FieldDefinition),
                opt(r!(Place)),
            ],
            seq![
                k!(Drop),
                alt![
                    seq![
                        opt(k!(Column)),
                        r!(ColumnInternalRef),
                        opt(any![Restrict, Cascade]),
                    ],
                    seq![k!(Foreign), k!(Key), ident()],
                    seq![k!(Primary), k!(Key)],
                    seq![r!(IndexOrKey), ident()],
                    since(8, 0, 19, seq![k!(Check), ident()]),
                    since(8, 0, 19, seq![k!(Constraint), ident()]),
                ],
            ],
            seq![k!(Disable), k!(Keys)],
            seq![k!(Enable), k!(Keys)],
            seq![
                k!(Alter),
                opt(k!(Column)),
                r!(ColumnInternalRef),
                alt![
                    seq![
                        k!(Set),
                        k!(Default),
                        alt![
                            r!(SignedLiteral),
                            seq![k!(OpenPar), r!(Expr), k!(ClosePar)],
                        ],
                    ],
                    seq![k!(Drop), k!(Default)],
                ],
            ],
            since(
                8,
                0,
                0,
                seq![k!(Alter), k!(Index), ident(), any![Visible, Invisible]],
            ),
            seq![k!(Rename), opt(any![To, As]), r!(TableName)],
            seq![k!(Rename), r!(IndexOrKey), ident(), k!(To), ident()],
            since(
                8,
                0,
                0,
                seq![
                    k!(Rename),
                    k!(Column),
                    r!(ColumnInternalRef),
                    k!(To),
                    ident(),
                ],
            ),
            seq![
                k!(Convert),
                k!(To),
                r!(Charset),
                alt![r!(CharsetName), k!(Default)],
                opt(seq![k!(Collate), ident()]),
            ],
            k!(Force),
            seq![
                k!(Order),
                k!(By),
                separated(seq![ident(), opt(r!(Direction))], TokenKind::Comma),
            ],
            r!(CreateTableOption),
        ],
    );
    g.define(
        RuleKind::Place,
        alt![seq![k!(After), ident()], k!(First)],
    );
    g.define(
        RuleKind::AlterDatabase,
        seq![k!(Database), opt(r!(SchemaRef)), some(r!(CreateDatabaseOption))],
    );
    g.define(
        RuleKind::AlterView,
        seq![
            opt(r!(ViewAlgorithm)),
            k!(View),
            r!(ViewRef),
            opt(r!(IdentifierListWithParentheses)),
            k!(As),
            r!(QueryExpression),
            opt(r!(ViewCheckOption)),
        ],
    );
    g.define(
        RuleKind::CreateStatement,
        seq![
            k!(Create),
            alt![
                r!(CreateDatabase),
                r!(CreateTable),
                r!(CreateIndex),
                r!(CreateView),
            ],
        ],
    );
    g.define(
        RuleKind::CreateDatabase,
        seq![
            k!(Database),
            opt(r!(IfNotExists)),
            ident(),
            many(r!(CreateDatabaseOption)),
        ],
    );
    g.define(
        RuleKind::CreateDatabaseOption,
        alt![
            seq![
                opt(k!(Default)),
                r!(Charset),
                opt(k!(Equal)),
                alt![r!(CharsetName), k!(Default)],
            ],
            seq![
                opt(k!(Default)),
                k!(Collate),
                opt(k!(Equal)),
                alt![ident(), k!(Default)],
            ],
        ],
    );
    g.define(
        RuleKind::CreateTable,
        seq![
            opt(k!(Temporary)),
            k!(Table),
            opt(r!(IfNotExists)),
            r!(TableName),
            alt![
                seq![
                    k!(OpenPar),
                    r!(TableElementList),
                    k!(ClosePar),
                    opt(r!(CreateTableOptions)),
                    opt(seq![opt(k!(As)), r!(QueryExpression)]),
                ],
                seq![k!(Like), r!(TableRef)],
                seq![k!(OpenPar), k!(Like), r!(TableRef), k!(ClosePar)],
                seq![opt(r!(CreateTableOptions)), opt(k!(As)), r!(QueryExpression)],
            ],
        ],
    );
    g.define(
        RuleKind::TableElementList,
        separated(r!(TableElement), TokenKind::Comma),
    );
    g.define(
        RuleKind::TableElement,
        alt![r!(ColumnDefinition), r!(TableConstraintDef)],
    );
    g.define(
        RuleKind::ColumnDefinition,
        seq![ident(), r!(FieldDefinition), opt(r!(ReferencesClause))],
    );
    g.define(
        RuleKind::FieldDefinition,
        seq![r!(DataType), many(r!(ColumnAttribute))],
    );
    g.define(
        RuleKind::DataType,
        alt![
            seq![
                any![Int, Tinyint, Smallint, Mediumint, Bigint],
                opt(r!(FieldLength)),
                opt(r!(FieldOptions)),
            ],
            seq![
                alt![k!(Real), seq![k!(Double), opt(k!(Precision))]],
                opt(r!(Precision)),
                opt(r!(FieldOptions)),
            ],
            seq![
                any![Float, Decimal, Numeric, Fixed],
                opt(r!(FloatOptions)),
                opt(r!(FieldOptions)),
            ],
            seq![k!(Bit), opt(r!(FieldLength))],
            any![Bool, Boolean],
            seq![k!(Char), opt(r!(FieldLength)), opt(r!(CharsetWithOptBinary))],
            seq![k!(Nchar), opt(r!(FieldLength)), opt(k!(Binary))],
            seq![k!(Binary), opt(r!(FieldLength))],
            seq![k!(Varchar), r!(FieldLength), opt(r!(CharsetWithOptBinary))],
            seq![k!(Nvarchar), r!(FieldLength), opt(k!(Binary))],
            seq![k!(Varbinary), r!(FieldLength)],
            any![Year, Date],
            seq![
                any![Time, Timestamp, Datetime],
                opt(r!(TypeDatetimePrecision)),
            ],
            any![Tinyblob, Blob, Mediumblob, Longblob],
            seq![
                any![Tinytext, Text, Mediumtext, Longtext],
                opt(r!(CharsetWithOptBinary)),
            ],
            seq![k!(Enum), r!(StringList), opt(r!(CharsetWithOptBinary))],
            seq![k!(Set), r!(StringList), opt(r!(CharsetWithOptBinary))],
            k!(Serial),
            since(5, 7, 8, k!(Json)),
            any![Geometry, Point, Linestring, Polygon],
        ],
    );
    g.define(
        RuleKind::FieldLength,
        seq![
            k!(OpenPar),
            any![IntNumber, DecimalNumber],
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::FieldOptions,
        some(any![Signed, Unsigned, Zerofill]),
    );
    g.define(
        RuleKind::Precision,
        seq![
            k!(OpenPar),
            k!(IntNumber),
            k!(Comma),
            k!(IntNumber),
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::FloatOptions,
        alt![r!(FieldLength), r!(Precision)],
    );
    g.define(
        RuleKind::TypeDatetimePrecision,
        seq![k!(OpenPar), k!(IntNumber), k!(ClosePar)],
    );
    g.define(
        RuleKind::StringList,
        seq![
            k!(OpenPar),
            separated(r!(TextString), TokenKind::Comma),
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::CharsetWithOptBinary,
        alt![
            seq![r!(Charset), r!(CharsetName), opt(k!(Binary))],
            k!(Ascii),
            k!(Unicode),
            seq![k!(Binary), opt(seq![r!(Charset), r!(CharsetName)])],
        ],
    );
    g.define(
        RuleKind::Charset,
        alt![seq![k!(Char), k!(Set)], k!(Charset)],
    );
    g.define(
        RuleKind::CharsetName,
        alt![ident(), r!(TextString), k!(Binary)],
    );
    g.define(
        RuleKind::CharsetClause,
        seq![r!(Charset), r!(CharsetName)],
    );
    g.define(
        RuleKind::ColumnAttribute,
        alt![
            seq![opt(k!(Not)), k!(Null)],
            seq![
                k!(Default),
                alt![
                    r!(SignedLiteral),
                    seq![k!(Now), opt(seq![k!(OpenPar), k!(ClosePar)])],
                    since(8, 0, 13, seq![k!(OpenPar), r!(Expr), k!(ClosePar)]),
                ],
            ],
            seq![k!(On), k!(Update), k!(Now), opt(seq![k!(OpenPar), k!(ClosePar)])],
            k!(AutoIncrement),
            seq![k!(Serial), k!(Default), k!(Value)],
            seq![opt(k!(Primary)), k!(Key)],
            seq![k!(Unique), opt(k!(Key))],
            seq![k!(Comment), r!(TextLiteral)],
            seq![k!(Collate), ident()],
            seq![k!(ColumnFormat), any![Fixed, Dynamic, Default]],
            since(8, 0, 16, r!(CheckConstraint)),
            since(8, 0, 16, seq![opt(k!(Not)), k!(Enforced)]),
        ],
    );
    g.define(
        RuleKind::TableConstraintDef,
        alt![
            seq![r!(IndexOrKey), opt(ident()), r!(KeyList)],
            seq![any![Fulltext, Spatial], opt(r!(IndexOrKey)), opt(ident()), r!(KeyList)],
            seq![
                opt(r!(ConstraintName)),
                alt![
                    seq![k!(Primary), k!(Key), opt(ident()), r!(KeyList)],
                    seq![k!(Unique), opt(r!(IndexOrKey)), opt(ident()), r!(KeyList)],
                    seq![
                        k!(Foreign),
                        k!(Key),
                        opt(ident()),
                        r!(KeyList),
                        r!(ReferencesClause),
                    ],
                    since(8, 0, 16, r!(CheckConstraint)),
                ],
            ],
        ],
    );
    g.define(
        RuleKind::ConstraintName,
        seq![k!(Constraint), opt(ident())],
    );
    g.define(
        RuleKind::CheckConstraint,
        seq![k!(Check), k!(OpenPar), r!(Expr), k!(ClosePar)],
    );
    g.define(
        RuleKind::KeyList,
        seq![
            k!(OpenPar),
            separated(
                seq![ident(), opt(r!(FieldLength)), opt(r!(Direction))],
                TokenKind::Comma,
            ),
            k!(ClosePar),
        ],
    );
    g.define(
        RuleKind::ReferencesClause,
        seq![
            k!(References),
            r!(TableRef),
            opt(r!(IdentifierListWithParentheses)),
            many(seq![
                k!(On),
                any![Update, Delete],
                r!(DeleteOption),
            ]),
        ],
    );
    g.define(
        RuleKind::DeleteOption,
        alt![
            any![Restrict, Cascade],
            seq![k!(Set), any![Null, Default]],
            seq![k!(No), k!(Action)],
        ],
    );
    g.define(
        RuleKind::CreateTableOptions,
        seq![
            r!(CreateTableOption),
            many(seq![opt(k!(Comma)), r!(CreateTableOption)]),
        ],
    );
    g.define(
        RuleKind::CreateTableOption,
        alt![
            seq![k!(Engine), opt(k!(Equal)), ident()],
            seq![k!(AutoIncrement), opt(k!(Equal)), k!(IntNumber)],
            seq![k!(Comment), opt(k!(Equal)), r!(TextLiteral)],
            seq![
                k!(RowFormat),
                opt(k!(Equal)),
                any![Default, Dynamic, Fixed, Compressed, Redundant, Compact],
            ],
            seq![
                opt(k!(Default)),
                r!(Charset),
                opt(k!(Equal)),
                alt![r!(CharsetName), k!(Default)],
            ],
            seq![opt(k!(Default)), k!(Collate), opt(k!(Equal)), ident()],
        ],
    );
    g.define(
        RuleKind::CreateIndex,
        seq![
            opt(any![Unique, Fulltext, Spatial]),
            k!(Index),
            ident(),
            k!(On),
            r!(TableRef),
            r!(KeyList),
            many(r!(IndexOption)),
        ],
    );
    g.define(
        RuleKind::IndexOption,
        alt![
            seq![k!(Using), any![Btree, Hash]],
            seq![k!(Comment), r!(TextLiteral)],
            since(8, 0, 0, any![Visible, Invisible]),
        ],
    );
    g.define(
        RuleKind::CreateView,
        seq![
            opt(seq![k!(Or), k!(Replace)]),
            opt(r!(ViewAlgorithm)),
            k!(View),
            r!(TableName),
            opt(r!(IdentifierListWithParentheses)),
            k!(As),
            r!(QueryExpression),
            opt(r!(ViewCheckOption)),
        ],
    );
    g.define(
        RuleKind::ViewAlgorithm,
        seq![
            k!(Algorithm),
            k!(Equal),
            any![Undefined, Merge, Temptable],
        ],
    );
    g.define(
        RuleKind::ViewCheckOption,
        seq![
            k!(With),
            opt(any![Cascaded, Local]),
            k!(Check),
            k!(Option),
        ],
    );
    g.define(
        RuleKind::DropStatement,
        seq![
            k!(Drop),
            alt![
                seq![k!(Database), opt(r!(IfExists)), r!(SchemaRef)],
                seq![
                    opt(k!(Temporary)),
                    any![Table, Tables],
                    opt(r!(IfExists)),
                    r!(TableRefList),
                    opt(any![Restrict, Cascade]),
                ],
                seq![
                    k!(View),
                    opt(r!(IfExists)),
                    separated(r!(ViewRef), TokenKind::Comma),
                    opt(any![Restrict, Cascade]),
                ],
                seq![
                    opt(any![Online, Offline]),
                    k!(Index),
                    ident(),
                    k!(On),
                    r!(TableRef),
                ],
            ],
        ],
    );
    g.define(
        RuleKind::RenameTableStatement,
        seq![
            k!(Rename),
            any![Table, Tables],
            separated(
                seq![r!(TableRef), k!(To), r!(TableName)],
                TokenKind::Comma,
            ),
        ],
    );
    g.define(
        RuleKind::TruncateTableStatement,
        seq![k!(Truncate), opt(k!(Table)), r!(TableRef)],
    );
    g.define(RuleKind::IfExists, seq![k!(If), k!(Exists)]);
    g.define(RuleKind::IfNotExists, seq![k!(If), k!(Not), k!(Exists)]);
}

fn transactions(g: &mut Grammar) {
    g.define(
        RuleKind::TransactionOrLockingStatement,
        alt![
            r!(TransactionStatement),
            r!(SavepointStatement),
            r!(LockStatement),
            r!(XaStatement),
        ],
    );
    g.define(
        RuleKind::TransactionStatement,
        alt![
            seq![
                k!(Start),
                k!(Transaction),
                opt(separated(r!(TransactionCharacteristic), TokenKind::Comma)),
            ],
            seq![
                k!(Commit),
                opt(k!(Work)),
                opt(seq![k!(And), opt(k!(No)), k!(Chain)]),
                opt(seq![opt(k!(No)), k!(Release)]),
            ],
        ],
    );
    g.define(RuleKind::BeginWork, seq![k!(Begin), opt(k!(Work))]);
    g.define(
        RuleKind::TransactionCharacteristic,
        alt![
            seq![k!(With), k!(Consistent), k!(Snapshot)],
            seq![k!(Read), any![Write, Only]],
        ],
    );
    g.define(
        RuleKind::SavepointStatement,
        alt![
            seq![k!(Savepoint), ident()],
            seq![
                k!(Rollback),
                opt(k!(Work)),
                alt![
                    seq![k!(To), opt(k!(Savepoint)), ident()],
                    seq![
                        opt(seq![k!(And), opt(k!(No)), k!(Chain)]),
                        opt(seq![opt(k!(No)), k!(Release)]),
                    ],
                ],
            ],
            seq![k!(Release), k!(Savepoint), ident()],
        ],
    );
    g.define(
        RuleKind::LockStatement,
        alt![
            seq![
                k!(Lock),
                any![Tables, Table],
                separated(r!(LockItem), TokenKind::Comma),
            ],
            seq![k!(Unlock), any![Tables, Table]],
        ],
    );
    g.define(
        RuleKind::LockItem,
        seq![
            r!(TableRef),
            opt(r!(TableAlias)),
            alt![
                seq![k!(Read), opt(k!(Local))],
                seq![opt(k!(LowPriority)), k!(Write)],
            ],
        ],
    );
    g.define(
        RuleKind::XaStatement,
        seq![
            k!(Xa),
            alt![
                seq![any![Start, Begin], r!(Xid), opt(any![Join, Resume])],
                seq![
                    k!(End),
                    r!(Xid),
                    opt(seq![k!(Suspend), opt(seq![k!(For), k!(Migrate)])]),
                ],
                seq![k!(Prepare), r!(Xid)],
                seq![k!(Commit), r!(Xid), opt(seq![k!(One), k!(Phase)])],
                seq![k!(Rollback), r!(Xid)],
                k!(Recover),
            ],
        ],
    );
    g.define(
        RuleKind::Xid,
        seq![
            r!(TextString),
            opt(seq![
                k!(Comma),
                r!(TextString),
                opt(seq![k!(Comma), k!(IntNumber)]),
            ]),
        ],
    );
}

fn replication(g: &mut Grammar) {
    g.define(
        RuleKind::ReplicationStatement,
        alt![
            seq![
                k!(Purge),
                any![Binary, Master],
                k!(Logs),
                alt![
                    seq![k!(To), r!(TextLiteral)],
                    seq![k!(Before), r!(Expr)],
                ],
            ],
            r!(ChangeMaster),
            since(5, 7, 3, r!(ChangeReplication)),
            seq![
                k!(Reset),
                alt![
                    k!(Master),
                    seq![k!(Slave), opt(k!(All))],
                    until(8, 0, 0, seq![k!(Query), k!(Cache)]),
                ],
            ],
            seq![k!(Start), k!(Slave)],
            seq![k!(Stop), k!(Slave)],
        ],
    );
    g.define(
        RuleKind::ChangeMaster,
        seq![
            k!(Change),
            k!(Master),
            k!(To),
            separated(
                seq![r!(MasterOption), k!(Equal), alt![r!(TextLiteral), k!(IntNumber)]],
                TokenKind::Comma,
            ),
        ],
    );
    g.define(
        RuleKind::MasterOption,
        any![
            MasterHost,
            MasterUser,
            MasterPassword,
            MasterPort,
            MasterLogFile,
            MasterLogPos,
        ],
    );
    g.define(
        RuleKind::ChangeReplication,
        seq![
            k!(Change),
            k!(Replication),
            k!(Filter),
            separated(r!(FilterDefinition), TokenKind::Comma),
        ],
    );
    g.define(
        RuleKind::FilterDefinition,
        alt![
            seq![
                any![ReplicateDoDb, ReplicateIgnoreDb],
                k!(Equal),
                k!(OpenPar),
                opt(separated(r!(SchemaRef), TokenKind::Comma)),
                k!(ClosePar),
            ],
            seq![
                any![ReplicateDoTable, ReplicateIgnoreTable],
                k!(Equal),
                k!(OpenPar),
                opt(separated(r!(FilterTableRef), TokenKind::Comma)),
                k!(ClosePar),
            ],
            seq![
                any![ReplicateWildDoTable, ReplicateWildIgnoreTable],
                k!(Equal),
                k!(OpenPar),
                opt(separated(r!(TextString), TokenKind::Comma)),
                k!(ClosePar),
            ],
        ],
    );
}

fn administration(g: &mut Grammar) {
    g.define(
        RuleKind::PreparedStatement,
        alt![
            seq![
                k!(Prepare),
                ident(),
                k!(From),
                alt![r!(TextLiteral), ident()],
            ],
            seq![
                k!(Execute),
                ident(),
                opt(seq![k!(Using), separated(ident(), TokenKind::Comma)]),
            ],
            seq![any![Deallocate, Drop], k!(Prepare), ident()],
        ],
    );
    g.define(
        RuleKind::AccountManagementStatement,
        alt![
            seq![
                k!(Grant),
                r!(PrivilegeList),
                k!(On),
                r!(GrantIdentifier),
                k!(To),
                r!(UserList),
                opt(seq![k!(With), k!(Grant), k!(Option)]),
            ],
            seq![
                k!(Revoke),
                r!(PrivilegeList),
                k!(On),
                r!(GrantIdentifier),
                k!(From),
                r!(UserList),
            ],
        ],
    );
    g.define(
        RuleKind::PrivilegeList,
        alt![
            seq![k!(All), opt(k!(Privileges))],
            separated(r!(PrivilegeType), TokenKind::Comma),
        ],
    );
    g.define(
        RuleKind::PrivilegeType,
        alt![
            any![
                Select, Insert, Update, Delete, Create, Drop, Alter, Index, Execute, Usage,
                Reload, Shutdown, Process, File, References, Event, Trigger,
            ],
            seq![k!(Show), k!(Databases)],
            seq![k!(Show), k!(View)],
            seq![k!(Create), any![View, Temporary, Routine, User]],
            seq![k!(Lock), k!(Tables)],
            seq![k!(Grant), k!(Option)],
            seq![k!(Replication), any![Client, Slave]],
        ],
    );
    g.define(
        RuleKind::GrantIdentifier,
        alt![
            seq![k!(Mult), opt(seq![k!(Dot), k!(Mult)])],
            seq![r!(SchemaRef), k!(Dot), k!(Mult)],
            r!(TableRef),
        ],
    );
    g.define(
        RuleKind::UserList,
        separated(r!(User), TokenKind::Comma),
    );
    g.define(
        RuleKind::User,
        seq![
            alt![ident(), r!(TextString)],
            opt(alt![
                seq![k!(AtSign), alt![ident(), r!(TextString)]],
                ident(),
            ]),
        ],
    );
    g.define(
        RuleKind::TableAdministrationStatement,
        alt![
            seq![
                k!(Analyze),
                opt(r!(NoWriteToBinLog)),
                k!(Table),
                r!(TableRefList),
            ],
            seq![
                k!(Check),
                k!(Table),
                r!(TableRefList),
                many(any![Upgrade, Quick, Fast, Medium, Extended, Changed]),
            ],
            seq![
                k!(Checksum),
                k!(Table),
                r!(TableRefList),
                opt(any![Quick, Extended]),
            ],
            seq![
                k!(Optimize),
                opt(r!(NoWriteToBinLog)),
                k!(Table),
                r!(TableRefList),
            ],
            seq![
                k!(Repair),
                opt(r!(NoWriteToBinLog)),
                k!(Table),
                r!(TableRefList),
                many(any![Quick, Extended, UseFrm]),
            ],
        ],
    );
    g.define(RuleKind::NoWriteToBinLog, any![Local, NoWriteToBinlog]);
    g.define(
        RuleKind::InstallUninstallStatement,
        alt![
            seq![k!(Install), k!(Plugin), ident(), k!(Soname), r!(TextLiteral)],
            since(
                8,
                0,
                0,
                seq![
                    k!(Install),
                    k!(Component),
                    separated(r!(TextLiteral), TokenKind::Comma),
                ],
            ),
            seq![k!(Uninstall), k!(Plugin), ident()],
            since(
                8,
                0,
                0,
                seq![
                    k!(Uninstall),
                    k!(Component),
                    separated(r!(TextLiteral), TokenKind::Comma),
                ],
            ),
        ],
    );
    g.define(
        RuleKind::SetStatement,
        seq![
            k!(Set),
            alt![
                seq![
                    opt(any![Global, Session]),
                    k!(Transaction),
                    separated(r!(TransactionCharacteristic), TokenKind::Comma),
                ],
                seq![k!(Password), k!(Equal), r!(TextLiteral)],
                separated(r!(OptionValue), TokenKind::Comma),
            ],
        ],
    );
    g.define(
        RuleKind::OptionValue,
        alt![
            seq![
                opt(any![Global, Session, Local, Persist, PersistOnly]),
                ident(),
                opt(seq![k!(Dot), ident()]),
                any![Equal, Assign],
                alt![r!(Expr), any![On, All, Binary, Row, System]],
            ],
            seq![
                k!(Names),
                alt![
                    seq![r!(CharsetName), opt(seq![k!(Collate), ident()])],
                    k!(Default),
                ],
            ],
            seq![r!(Charset), alt![r!(CharsetName), k!(Default)]],
        ],
    );
    g.define(
        RuleKind::ShowStatement,
        seq![
            k!(Show),
            alt![
                seq![k!(Databases), opt(r!(LikeOrWhere))],
                seq![
                    opt(k!(Full)),
                    k!(Tables),
                    opt(r!(InDb)),
                    opt(r!(LikeOrWhere)),
                ],
                seq![k!(Table), k!(Status), opt(r!(InDb)), opt(r!(LikeOrWhere))],
                seq![
                    opt(k!(Open)),
                    k!(Tables),
                    opt(r!(InDb)),
                    opt(r!(LikeOrWhere)),
                ],
                seq![
                    opt(k!(Full)),
                    k!(Columns),
                    any![From, In],
                    r!(TableRef),
                    opt(r!(InDb)),
                    opt(r!(LikeOrWhere)),
                ],
                seq![
                    any![Index, Indexes, Keys],
                    any![From, In],
                    r!(TableRef),
                    opt(r!(InDb)),
                    opt(r!(WhereClause)),
                ],
                seq![opt(k!(Storage)), k!(Engines)],
                seq![
                    opt(any![Global, Session]),
                    any![Status, Variables],
                    opt(r!(LikeOrWhere)),
                ],
                seq![opt(k!(Full)), k!(Processlist)],
                seq![any![Warnings, Errors], opt(r!(SimpleLimitClause))],
                seq![k!(Grants), opt(seq![k!(For), r!(User)])],
                seq![
                    k!(Create),
                    alt![
                        seq![k!(Table), r!(TableRef)],
                        seq![k!(Database), opt(r!(IfNotExists)), r!(SchemaRef)],
                        seq![k!(View), r!(ViewRef)],
                    ],
                ],
                k!(Privileges),
                seq![any![Binary, Master], k!(Logs)],
                seq![any![Master, Slave], k!(Status)],
                k!(Plugins),
                seq![any![Triggers, Events], opt(r!(InDb)), opt(r!(LikeOrWhere))],
                seq![r!(Charset), opt(r!(LikeOrWhere))],
                seq![k!(Collation), opt(r!(LikeOrWhere))],
            ],
        ],
    );
    g.define(
        RuleKind::InDb,
        seq![any![From, In], r!(SchemaRef)],
    );
    g.define(
        RuleKind::LikeOrWhere,
        alt![seq![k!(Like), r!(TextString)], r!(WhereClause)],
    );
    g.define(
        RuleKind::OtherAdministrativeStatement,
        alt![
            seq![k!(Binlog), r!(TextLiteral)],
            seq![
                k!(Cache),
                k!(Index),
                separated(
                    seq![r!(TableRef), opt(seq![r!(IndexOrKey), r!(IdentifierListWithParentheses)])],
                    TokenKind::Comma,
                ),
                k!(In),
                alt![ident(), k!(Default)],
            ],
            seq![
                k!(Flush),
                opt(r!(NoWriteToBinLog)),
                alt![
                    seq![
                        any![Tables, Table],
                        opt(r!(TableRefList)),
                        opt(seq![k!(With), k!(Read), k!(Lock)]),
                    ],
                    separated(r!(FlushOption), TokenKind::Comma),
                ],
            ],
            seq![k!(Kill), opt(any![Connection, Query]), r!(Expr)],
            since(8, 0, 3, k!(Shutdown)),
        ],
    );
    g.define(
        RuleKind::FlushOption,
        alt![
            seq![
                opt(any![Binary, Engine, Error, General, Relay, Slow]),
                k!(Logs),
            ],
            any![Hosts, Privileges, Status, UserResources],
            since(8, 0, 0, k!(OptimizerCosts)),
        ],
    );
}

fn utility(g: &mut Grammar) {
    g.define(
        RuleKind::UtilityStatement,
        alt![
            r!(DescribeStatement),
            r!(ExplainStatement),
            r!(HelpCommand),
            r!(UseCommand),
        ],
    );
    g.define(
        RuleKind::DescribeStatement,
        seq![
            any![Explain, Describe, Desc],
            r!(TableRef),
            opt(alt![r!(TextString), r!(ColumnRef)]),
        ],
    );
    g.define(
        RuleKind::ExplainStatement,
        seq![
            any![Explain, Describe, Desc],
            opt(alt![
                until(8, 0, 0, any![Extended, Partitions]),
                seq![k!(Format), k!(Equal), ident()],
                since(8, 0, 18, k!(Analyze)),
            ]),
            alt![
                r!(SelectStatement),
                r!(DeleteStatement),
                r!(InsertStatement),
                r!(ReplaceStatement),
                r!(UpdateStatement),
                seq![k!(For), k!(Connection), k!(IntNumber)],
            ],
        ],
    );
    g.define(
        RuleKind::HelpCommand,
        seq![k!(Help), alt![ident(), r!(TextString)]],
    );
    g.define(RuleKind::UseCommand, seq![k!(Use), r!(SchemaRef)]);
}

/// Rules naming database objects. The reference rules completion binds to
/// (`tableRef`, `columnRef` and friends) only contain terminals.
fn references(g: &mut Grammar) {
    g.define(RuleKind::SchemaRef, ident());
    g.define(
        RuleKind::TableRef,
        alt![
            seq![ident(), opt(seq![k!(Dot), ident()])],
            seq![k!(Dot), ident()],
        ],
    );
    g.define(
        RuleKind::TableRefList,
        separated(r!(TableRef), TokenKind::Comma),
    );
    g.define(
        RuleKind::FilterTableRef,
        seq![ident(), k!(Dot), ident()],
    );
    g.define(
        RuleKind::TableWild,
        seq![
            ident(),
            k!(Dot),
            opt(seq![ident(), k!(Dot)]),
            k!(Mult),
        ],
    );
    g.define(
        RuleKind::ColumnRef,
        alt![
            seq![
                ident(),
                opt(seq![k!(Dot), ident(), opt(seq![k!(Dot), ident()])]),
            ],
            seq![k!(Dot), ident(), k!(Dot), ident()],
        ],
    );
    g.define(RuleKind::ColumnInternalRef, ident());
    g.define(
        RuleKind::TableName,
        alt![
            seq![ident(), opt(seq![k!(Dot), ident()])],
            seq![k!(Dot), ident()],
        ],
    );
    g.define(
        RuleKind::ViewRef,
        seq![ident(), opt(seq![k!(Dot), ident()])],
    );
    g.define(
        RuleKind::ProcedureRef,
        seq![ident(), opt(seq![k!(Dot), ident()])],
    );
    g.define(
        RuleKind::IdentifierListWithParentheses,
        seq![
            k!(OpenPar),
            separated(ident(), TokenKind::Comma),
            k!(ClosePar),
        ],
    );
}

fn literals(g: &mut Grammar) {
    g.define(
        RuleKind::Literal,
        alt![
            r!(TextLiteral),
            r!(NumLiteral),
            r!(TemporalLiteral),
            k!(Null),
            any![True, False],
            any![HexNumber, BinNumber],
        ],
    );
    g.define(
        RuleKind::SignedLiteral,
        alt![
            r!(Literal),
            seq![any![Plus, Minus], r!(NumLiteral)],
        ],
    );
    g.define(
        RuleKind::TextLiteral,
        some(alt![r!(TextStringLiteral), k!(NcharText)]),
    );
    g.define(
        RuleKind::TextStringLiteral,
        any![SingleQuotedText, DoubleQuotedText],
    );
    g.define(
        RuleKind::TextString,
        alt![r!(TextStringLiteral), k!(HexNumber), k!(BinNumber)],
    );
    g.define(
        RuleKind::NumLiteral,
        any![IntNumber, DecimalNumber, FloatNumber],
    );
    g.define(
        RuleKind::TemporalLiteral,
        seq![any![Date, Time, Timestamp], k!(SingleQuotedText)],
    );
}
