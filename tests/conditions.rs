use pgext::core::expr::{and, eq, exists, in_subquery, not, or};
use pgext::core::{SQL, ToSQL, Token};
use pgext::postgres::{Expression, Field, PostgresValue};

const ID: Field<i64> = Field::new("users", "id");
const NAME: Field<String> = Field::new("users", "name");
const AGE: Field<i32> = Field::new("users", "age");

#[test]
fn and_binds_in_declaration_order() {
    let (sql, params) = and([ID.eq(1), NAME.eq("bob")]).into_parts();
    assert_eq!(sql, r#"("users"."id" = $1 AND "users"."name" = $2)"#);
    assert_eq!(
        params,
        vec![PostgresValue::Bigint(1), PostgresValue::Text("bob".into())]
    );
}

#[test]
fn nesting_under_or_keeps_precedence() {
    let both = and([ID.eq(1), NAME.eq("bob")]);
    let (sql, params) = or([both, AGE.gt(30)]).into_parts();
    assert_eq!(
        sql,
        r#"(("users"."id" = $1 AND "users"."name" = $2) OR "users"."age" > $3)"#
    );
    assert_eq!(params.len(), 3);
    assert_eq!(params[2], PostgresValue::Integer(30));
}

#[test]
fn placeholders_number_across_composition() {
    let left = ID.between(1, 10);
    let right = AGE.in_list([18, 21]);
    let expr = !(left | right) & NAME.like("a%");
    let (sql, params) = expr.build();
    assert_eq!(
        sql,
        r#"(NOT ("users"."id" BETWEEN $1 AND $2 OR "users"."age" IN ($3, $4)) AND "users"."name" LIKE $5)"#
    );
    assert_eq!(params.len(), 5);
    assert_eq!(params[4], &PostgresValue::Text("a%".into()));
}

#[test]
fn single_operands_are_not_wrapped() {
    assert_eq!(and([ID.eq(1)]).sql(), r#""users"."id" = $1"#);
    assert_eq!(or([ID.eq(1)]).sql(), r#""users"."id" = $1"#);
    assert_eq!(not(ID.is_null()).sql(), r#"NOT ("users"."id" IS NULL)"#);
}

#[test]
fn empty_operand_lists_degrade_to_tautologies() {
    assert_eq!(and(Vec::<Expression>::new()).sql(), "1=1");
    assert_eq!(or(Vec::<Expression>::new()).sql(), "1=0");
    assert_eq!(ID.in_list(Vec::<i64>::new()).sql(), "1=0");
    assert_eq!(ID.not_in(Vec::<i64>::new()).sql(), "1=1");

    // still valid SQL once composed
    let expr = and([ID.in_list(Vec::<i64>::new()), AGE.gt(1)]);
    assert_eq!(expr.sql(), r#"(1=0 AND "users"."age" > $1)"#);
}

#[test]
fn subqueries_are_embedded_verbatim() {
    let banned: SQL<'_, PostgresValue<'_>> = SQL::raw("SELECT user_id FROM bans WHERE active");
    assert_eq!(
        ID.not_in_subquery(banned.clone()).sql(),
        r#""users"."id" NOT IN (SELECT user_id FROM bans WHERE active)"#
    );
    assert_eq!(
        in_subquery(ID, banned.clone()).sql(),
        r#""users"."id" IN (SELECT user_id FROM bans WHERE active)"#
    );
    assert_eq!(
        exists(banned).sql(),
        "EXISTS (SELECT user_id FROM bans WHERE active)"
    );
}

#[test]
fn fields_compare_with_fields() {
    let manager: Field<i64> = Field::new("managers", "id");
    assert_eq!(eq(ID, manager).sql(), r#""users"."id" = "managers"."id""#);
}

#[test]
fn quoted_identifiers_escape_quotes() {
    let odd: Field<i32> = Field::new("we\"ird", "col");
    assert_eq!(odd.eq(1).sql(), r#""we""ird"."col" = $1"#);
}

#[test]
fn raw_fragments_and_tokens_space_correctly() {
    let column: SQL<'_, PostgresValue<'_>> = ToSQL::to_sql(&ID);
    let sql = SQL::func("lower", column)
        .push(Token::EQ)
        .append(SQL::param(PostgresValue::from("x")));
    assert_eq!(sql.sql(), r#"lower("users"."id") = $1"#);
}
