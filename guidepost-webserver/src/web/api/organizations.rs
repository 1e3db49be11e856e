use super::*;

#[post("/organizations", format = "application/json", data = "<new_org>")]
pub fn post_organization(
    db: sqlite::Connections,
    auth: Auth,
    new_org: JsonResult<json::NewOrganization>,
) -> Result<json::Organization> {
    let new_org = from_json::new_organization(new_org?.into_inner());
    let user = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let org = flows::create_organization(&db, &user, new_org)?;
    Ok(Json(org.into()))
}

#[get("/organizations/<id>")]
pub fn get_organization(db: sqlite::Connections, id: String) -> Result<json::Organization> {
    let org = {
        let db = db.shared()?;
        usecases::get_organization(&db, &id)?
    };
    Ok(Json(org.into()))
}
