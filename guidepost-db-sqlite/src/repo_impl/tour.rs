use super::*;

impl<'a> TourRepo for DbReadWrite<'a> {
    fn create_tour(&self, tour: &Tour) -> Result<()> {
        create_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn update_tour(&self, tour: &Tour) -> Result<()> {
        update_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn get_tour(&self, id: &str) -> Result<Tour> {
        get_tour(&mut self.conn.borrow_mut(), id)
    }
    fn all_tours(&self, pagination: &Pagination) -> Result<Vec<Tour>> {
        all_tours(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_tours(&self) -> Result<usize> {
        count_tours(&mut self.conn.borrow_mut())
    }
}

impl<'a> TourRepo for DbConnection<'a> {
    fn create_tour(&self, tour: &Tour) -> Result<()> {
        create_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn update_tour(&self, tour: &Tour) -> Result<()> {
        update_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn get_tour(&self, id: &str) -> Result<Tour> {
        get_tour(&mut self.conn.borrow_mut(), id)
    }
    fn all_tours(&self, pagination: &Pagination) -> Result<Vec<Tour>> {
        all_tours(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_tours(&self) -> Result<usize> {
        count_tours(&mut self.conn.borrow_mut())
    }
}

impl<'a> TourRepo for DbReadOnly<'a> {
    fn create_tour(&self, _tour: &Tour) -> Result<()> {
        unreachable!();
    }
    fn update_tour(&self, _tour: &Tour) -> Result<()> {
        unreachable!();
    }
    fn get_tour(&self, id: &str) -> Result<Tour> {
        get_tour(&mut self.conn.borrow_mut(), id)
    }
    fn all_tours(&self, pagination: &Pagination) -> Result<Vec<Tour>> {
        all_tours(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_tours(&self) -> Result<usize> {
        count_tours(&mut self.conn.borrow_mut())
    }
}

fn load_itinerary(conn: &mut SqliteConnection, tour_rowid: i64) -> Result<Vec<ItineraryStop>> {
    use schema::tour_itinerary_stop::dsl;
    Ok(schema::tour_itinerary_stop::table
        .filter(dsl::parent_rowid.eq(&tour_rowid))
        .order_by(dsl::sequence)
        .load::<models::TourItineraryStop>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::TourItineraryStop {
                 parent_rowid: _,
                 sequence,
                 title,
                 location,
                 duration_minutes,
                 description,
                 time,
             }| ItineraryStop {
                sequence: sequence as u16,
                title,
                location,
                duration_minutes: duration_minutes as u32,
                description,
                time,
            },
        )
        .collect())
}

fn replace_child_rows(conn: &mut SqliteConnection, tour_rowid: i64, tour: &Tour) -> Result<()> {
    use schema::{
        tour_inclusion::dsl as inclusion_dsl, tour_itinerary_stop::dsl as stop_dsl,
        tour_language::dsl as language_dsl, tour_tag::dsl as tag_dsl,
    };
    diesel::delete(schema::tour_itinerary_stop::table.filter(stop_dsl::parent_rowid.eq(tour_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(schema::tour_tag::table.filter(tag_dsl::parent_rowid.eq(tour_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(schema::tour_language::table.filter(language_dsl::parent_rowid.eq(tour_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(schema::tour_inclusion::table.filter(inclusion_dsl::parent_rowid.eq(tour_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    for stop in &tour.itinerary {
        let new_stop = models::TourItineraryStop {
            parent_rowid: tour_rowid,
            sequence: stop.sequence as i16,
            title: stop.title.clone(),
            location: stop.location.clone(),
            duration_minutes: stop.duration_minutes as i32,
            description: stop.description.clone(),
            time: stop.time.clone(),
        };
        diesel::insert_into(schema::tour_itinerary_stop::table)
            .values(&new_stop)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for tag in &tour.tags {
        let new_tag = models::NewTourTag {
            parent_rowid: tour_rowid,
            tag,
        };
        diesel::insert_into(schema::tour_tag::table)
            .values(&new_tag)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for language in &tour.languages {
        let new_language = models::NewTourLanguage {
            parent_rowid: tour_rowid,
            language,
        };
        diesel::insert_into(schema::tour_language::table)
            .values(&new_language)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for inclusion in &tour.inclusions {
        let new_inclusion = models::NewTourInclusion {
            parent_rowid: tour_rowid,
            inclusion,
        };
        diesel::insert_into(schema::tour_inclusion::table)
            .values(&new_inclusion)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn into_tour(conn: &mut SqliteConnection, row: models::TourRow) -> Result<Tour> {
    use schema::{
        tour_inclusion::dsl as inclusion_dsl, tour_language::dsl as language_dsl,
        tour_tag::dsl as tag_dsl,
    };
    let models::TourRow {
        rowid,
        id,
        org_rowid,
        guide_rowid,
        name,
        description,
        price,
        location,
        date,
        status,
        max_group_size,
    } = row;
    let organization_id = load_organization_id(conn, org_rowid)?;
    let guide_id = guide_rowid
        .map(|guide_rowid| load_guide_id(conn, guide_rowid))
        .transpose()?;
    let itinerary = load_itinerary(conn, rowid)?;
    let tags = schema::tour_tag::table
        .select(tag_dsl::tag)
        .filter(tag_dsl::parent_rowid.eq(rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let languages = schema::tour_language::table
        .select(language_dsl::language)
        .filter(language_dsl::parent_rowid.eq(rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let inclusions = schema::tour_inclusion::table
        .select(inclusion_dsl::inclusion)
        .filter(inclusion_dsl::parent_rowid.eq(rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    Ok(Tour {
        id: id.into(),
        organization_id: organization_id.into(),
        guide_id: guide_id.map(Into::into),
        name,
        description,
        price: price as u64,
        location,
        date: Timestamp::from_secs(date),
        status: load_tour_status(status)?,
        itinerary,
        tags,
        languages,
        inclusions,
        max_group_size: max_group_size as u32,
    })
}

fn create_tour(conn: &mut SqliteConnection, tour: &Tour) -> Result<()> {
    let org_rowid = resolve_organization_rowid(conn, tour.organization_id.as_str())?;
    let guide_rowid = tour
        .guide_id
        .as_ref()
        .map(|id| resolve_guide_rowid(conn, id.as_str()))
        .transpose()?;
    let new_tour = models::NewTour {
        id: tour.id.as_str(),
        org_rowid,
        guide_rowid,
        name: &tour.name,
        description: &tour.description,
        price: tour.price as i64,
        location: &tour.location,
        date: tour.date.as_secs(),
        status: TourStatusPrimitive::from(tour.status),
        max_group_size: i64::from(tour.max_group_size),
    };
    run_in_transaction(conn, |conn| {
        diesel::insert_into(schema::tours::table)
            .values(&new_tour)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let tour_rowid = resolve_tour_rowid(conn, tour.id.as_str())?;
        replace_child_rows(conn, tour_rowid, tour)
    })
}

fn update_tour(conn: &mut SqliteConnection, tour: &Tour) -> Result<()> {
    use schema::tours::dsl;
    let tour_rowid = resolve_tour_rowid(conn, tour.id.as_str())?;
    let guide_rowid = tour
        .guide_id
        .as_ref()
        .map(|id| resolve_guide_rowid(conn, id.as_str()))
        .transpose()?;
    run_in_transaction(conn, |conn| {
        let _count = diesel::update(schema::tours::table.filter(dsl::rowid.eq(tour_rowid)))
            .set((
                dsl::guide_rowid.eq(guide_rowid),
                dsl::name.eq(&tour.name),
                dsl::description.eq(&tour.description),
                dsl::price.eq(tour.price as i64),
                dsl::location.eq(&tour.location),
                dsl::date.eq(tour.date.as_secs()),
                dsl::status.eq(TourStatusPrimitive::from(tour.status)),
                dsl::max_group_size.eq(i64::from(tour.max_group_size)),
            ))
            .execute(conn)
            .map_err(from_diesel_err)?;
        debug_assert_eq!(1, _count);
        replace_child_rows(conn, tour_rowid, tour)
    })
}

fn get_tour(conn: &mut SqliteConnection, id: &str) -> Result<Tour> {
    use schema::tours::dsl;
    let row = schema::tours::table
        .filter(dsl::id.eq(id))
        .first::<models::TourRow>(conn)
        .map_err(from_diesel_err)?;
    into_tour(conn, row)
}

fn all_tours(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<Tour>> {
    use schema::tours::dsl;
    let mut query = schema::tours::table
        .order_by(dsl::date.asc())
        .into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    let rows = query
        .load::<models::TourRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter().map(|row| into_tour(conn, row)).collect()
}

fn count_tours(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::tours::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
