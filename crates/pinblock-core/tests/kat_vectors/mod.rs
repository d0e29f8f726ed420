mod iso3;
