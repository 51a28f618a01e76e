mod avatar;
mod online_record;
mod user_info;
mod wait_list;
mod will_list;
