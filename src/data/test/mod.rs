mod note;
