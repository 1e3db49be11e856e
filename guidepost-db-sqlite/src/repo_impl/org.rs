use super::*;

impl<'a> OrganizationRepo for DbReadWrite<'a> {
    fn create_org(&self, org: &Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn update_org(&self, org: &Organization) -> Result<()> {
        update_org(&mut self.conn.borrow_mut(), org)
    }
    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_org_by_user_email(&self, email: &EmailAddress) -> Result<Option<Organization>> {
        try_get_org_by_user_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> OrganizationRepo for DbConnection<'a> {
    fn create_org(&self, org: &Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn update_org(&self, org: &Organization) -> Result<()> {
        update_org(&mut self.conn.borrow_mut(), org)
    }
    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_org_by_user_email(&self, email: &EmailAddress) -> Result<Option<Organization>> {
        try_get_org_by_user_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_org(&self, _org: &Organization) -> Result<()> {
        unreachable!();
    }
    fn update_org(&self, _org: &Organization) -> Result<()> {
        unreachable!();
    }
    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_org_by_user_email(&self, email: &EmailAddress) -> Result<Option<Organization>> {
        try_get_org_by_user_email(&mut self.conn.borrow_mut(), email)
    }
}

fn into_org(conn: &mut SqliteConnection, row: models::OrganizationRow) -> Result<Organization> {
    let models::OrganizationRow {
        rowid: _,
        id,
        user_rowid,
        name,
        tax_id,
        website,
        slogan,
    } = row;
    let user_email = load_user_email(conn, user_rowid)?;
    let tax_id =
        TaxId::try_from(tax_id).map_err(|err| anyhow!("Failed to load tax id: {err}"))?;
    Ok(Organization {
        id: id.into(),
        user_email: EmailAddress::new_unchecked(user_email),
        name,
        tax_id,
        website: website.and_then(load_url),
        slogan,
    })
}

fn create_org(conn: &mut SqliteConnection, org: &Organization) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, org.user_email.as_str())?;
    let website = org.website.as_ref().map(url::Url::as_str);
    let new_org = models::NewOrganization {
        id: org.id.as_str(),
        user_rowid,
        name: &org.name,
        tax_id: i64::from(org.tax_id),
        website,
        slogan: org.slogan.as_deref(),
    };
    let _count = diesel::insert_into(schema::organizations::table)
        .values(&new_org)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_org(conn: &mut SqliteConnection, org: &Organization) -> Result<()> {
    use schema::organizations::dsl;
    let website = org.website.as_ref().map(url::Url::as_str);
    let count = diesel::update(schema::organizations::table.filter(dsl::id.eq(org.id.as_str())))
        .set((
            dsl::name.eq(&org.name),
            dsl::tax_id.eq(i64::from(org.tax_id)),
            dsl::website.eq(website),
            dsl::slogan.eq(org.slogan.as_deref()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_org(conn: &mut SqliteConnection, id: &str) -> Result<Organization> {
    use schema::organizations::dsl;
    let row = schema::organizations::table
        .filter(dsl::id.eq(id))
        .first::<models::OrganizationRow>(conn)
        .map_err(from_diesel_err)?;
    into_org(conn, row)
}

fn try_get_org_by_user_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<Organization>> {
    use schema::{organizations::dsl, users::dsl as user_dsl};
    schema::organizations::table
        .inner_join(schema::users::table)
        .select((
            dsl::rowid,
            dsl::id,
            dsl::user_rowid,
            dsl::name,
            dsl::tax_id,
            dsl::website,
            dsl::slogan,
        ))
        .filter(user_dsl::email.eq(email.as_str()))
        .first::<models::OrganizationRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| into_org(conn, row))
        .transpose()
}
