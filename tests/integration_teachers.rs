mod common;

use axum::http::StatusCode;
use common::{
    TEST_PASSWORD, admin_cookie, assert_redirect_with, count_rows, create_test_department,
    create_test_teacher, generate_unique_matricule, get, get_json, post_form, setup_test_app,
};
use sqlx::PgPool;

#[derive(Debug, sqlx::FromRow)]
struct StoredTeacher {
    matricule: String,
    name: String,
    surname: String,
    email: Option<String>,
    password: String,
    department_id: i32,
}

async fn stored_teacher(pool: &PgPool, id: i32) -> StoredTeacher {
    sqlx::query_as(
        "SELECT matricule, name, surname, email, password, department_id FROM teachers WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn setup_department(pool: &PgPool, name: &str) -> i32 {
    let mut tx = pool.begin().await.unwrap();
    let id = create_test_department(&mut tx, name).await;
    tx.commit().await.unwrap();
    id
}

fn create_body(matricule: &str, department_id: i32) -> String {
    format!(
        "matricule={}&nom=Traore&prenom=Moussa&email=traore%40univ.test&mot_de_passe=secret&id_departement={}",
        matricule, department_id
    )
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_and_list(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let matricule = generate_unique_matricule("T");
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        "/admin/teachers/add",
        Some(&cookie),
        &create_body(&matricule, department_id),
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher added successfully");

    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/admin/teachers", &cookie).await;
    assert_eq!(status, StatusCode::OK);
    let teachers = body["teachers"].as_array().unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0]["matricule"], matricule.as_str());
    assert_eq!(teachers[0]["email"], "traore@univ.test");
    assert_eq!(teachers[0]["department_name"], "Physics");
    assert!(teachers[0].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_duplicate_matricule(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let matricule = generate_unique_matricule("T");
    let mut tx = pool.begin().await.unwrap();
    create_test_teacher(&mut tx, &matricule, department_id).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        "/admin/teachers/add",
        Some(&admin_cookie()),
        &create_body(&matricule, department_id),
    )
    .await;

    assert_redirect_with(
        &response,
        "/admin/teachers",
        "This matricule or email already exists",
    );
    assert_eq!(count_rows(&pool, "teachers").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_missing_field(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        "/admin/teachers/add",
        Some(&admin_cookie()),
        &format!(
            "matricule=T-1&nom=Traore&mot_de_passe=pw&id_departement={}",
            department_id
        ),
    )
    .await;

    assert_redirect_with(&response, "/admin/teachers", "Surname is required");
    assert_eq!(count_rows(&pool, "teachers").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_bad_department(pool: PgPool) {
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        "/admin/teachers/add",
        Some(&cookie),
        "matricule=T-1&nom=Traore&prenom=Moussa&mot_de_passe=pw&id_departement=abc",
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Invalid department identifier");

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        "/admin/teachers/add",
        Some(&cookie),
        "matricule=T-1&nom=Traore&prenom=Moussa&mot_de_passe=pw&id_departement=4242",
    )
    .await;
    assert_redirect_with(
        &response,
        "/admin/teachers",
        "The selected department does not exist",
    );

    assert_eq!(count_rows(&pool, "teachers").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_teacher_blank_password_keeps_stored(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let other_department = setup_department(&pool, "Chemistry").await;
    let matricule = generate_unique_matricule("T");
    let mut tx = pool.begin().await.unwrap();
    let teacher_id = create_test_teacher(&mut tx, &matricule, department_id).await;
    tx.commit().await.unwrap();
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let (status, body) =
        get_json(app, &format!("/admin/teachers/edit/{}", teacher_id), &cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teacher"]["matricule"], matricule.as_str());
    assert_eq!(body["departments"].as_array().unwrap().len(), 2);

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/admin/teachers/edit/{}", teacher_id),
        Some(&cookie),
        &format!(
            "matricule=&nom=Kone&prenom=Aminata&mot_de_passe=&id_departement={}",
            other_department
        ),
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher updated successfully");

    let stored = stored_teacher(&pool, teacher_id).await;
    assert_eq!(stored.matricule, matricule);
    assert_eq!(stored.name, "Kone");
    assert_eq!(stored.surname, "Aminata");
    assert_eq!(stored.password, TEST_PASSWORD);
    assert_eq!(stored.email.as_deref(), Some("kone@univ.test"));
    assert_eq!(stored.department_id, other_department);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_teacher_blank_email_clears_it(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let mut tx = pool.begin().await.unwrap();
    let teacher_id =
        create_test_teacher(&mut tx, &generate_unique_matricule("T"), department_id).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/admin/teachers/edit/{}", teacher_id),
        Some(&admin_cookie()),
        "email=&mot_de_passe=new-secret",
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher updated successfully");

    let stored = stored_teacher(&pool, teacher_id).await;
    assert_eq!(stored.email, None);
    assert_eq!(stored.password, "new-secret");
    assert_eq!(stored.name, "Kone");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_missing_teacher(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = get(app, "/admin/teachers/edit/999", Some(&admin_cookie())).await;

    assert_redirect_with(&response, "/admin/teachers", "Teacher not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_teachers_filter_and_order(pool: PgPool) {
    let physics = setup_department(&pool, "Physics").await;
    let chemistry = setup_department(&pool, "Chemistry").await;
    let mut tx = pool.begin().await.unwrap();
    for (matricule, surname, department_id) in [
        ("T-ZZ", "Zongo", physics),
        ("T-AA", "Ahoua", physics),
        ("T-CC", "Coulibaly", chemistry),
    ] {
        sqlx::query(
            r#"INSERT INTO teachers (matricule, name, surname, password, department_id)
               VALUES ($1, 'Prof', $2, 'pw', $3)"#,
        )
        .bind(matricule)
        .bind(surname)
        .bind(department_id)
        .execute(&mut *tx)
        .await
        .unwrap();
    }
    tx.commit().await.unwrap();
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let (_, body) = get_json(app, "/admin/teachers", &cookie).await;
    let surnames: Vec<&str> = body["teachers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|teacher| teacher["surname"].as_str().unwrap())
        .collect();
    assert_eq!(surnames, vec!["Ahoua", "Coulibaly", "Zongo"]);

    let app = setup_test_app(pool.clone());
    let (_, body) = get_json(
        app,
        &format!("/admin/teachers?department_id={}", physics),
        &cookie,
    )
    .await;
    let teachers = body["teachers"].as_array().unwrap();
    assert_eq!(teachers.len(), 2);
    assert!(teachers.iter().all(|teacher| teacher["department_id"] == physics));

    let app = setup_test_app(pool.clone());
    let (_, body) = get_json(app, "/admin/teachers?department_id=", &cookie).await;
    assert_eq!(body["teachers"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_teacher(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let mut tx = pool.begin().await.unwrap();
    let teacher_id =
        create_test_teacher(&mut tx, &generate_unique_matricule("T"), department_id).await;
    tx.commit().await.unwrap();
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/admin/teachers/delete/{}", teacher_id),
        Some(&cookie),
        "",
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher deleted successfully");
    assert_eq!(count_rows(&pool, "teachers").await, 0);

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/admin/teachers/delete/{}", teacher_id),
        Some(&cookie),
        "",
    )
    .await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_teacher_duplicate_matricule(pool: PgPool) {
    let department_id = setup_department(&pool, "Physics").await;
    let taken = generate_unique_matricule("T");
    let own = generate_unique_matricule("T");
    let mut tx = pool.begin().await.unwrap();
    create_test_teacher(&mut tx, &taken, department_id).await;
    let teacher_id = create_test_teacher(&mut tx, &own, department_id).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/admin/teachers/edit/{}", teacher_id),
        Some(&admin_cookie()),
        &format!("matricule={}&nom=Renamed", taken),
    )
    .await;

    assert_redirect_with(
        &response,
        "/admin/teachers",
        "This matricule or email already exists",
    );
    let stored = stored_teacher(&pool, teacher_id).await;
    assert_eq!(stored.matricule, own);
    assert_eq!(stored.name, "Kone");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_numeric_teacher_id_redirects(pool: PgPool) {
    let cookie = admin_cookie();

    let app = setup_test_app(pool.clone());
    let response = post_form(app, "/admin/teachers/delete/abc", Some(&cookie), "").await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher not found");

    let app = setup_test_app(pool.clone());
    let response = get(app, "/admin/teachers/edit/12x", Some(&cookie)).await;
    assert_redirect_with(&response, "/admin/teachers", "Teacher not found");
}
